use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTriangleExclamation;
use dioxus_free_icons::Icon;

use crate::client::{router::Route, util::api::ApiError};

/// Page-level error with a manual retry; rejected sessions go back to the login screen
#[component]
pub fn ErrorPanel(error: ApiError, on_retry: EventHandler<()>) -> Element {
    let navigator = use_navigator();
    let unauthorized = matches!(error, ApiError::Unauthorized(_));

    use_effect(move || {
        if unauthorized {
            navigator.replace(Route::Login {});
        }
    });

    rsx!(
        div { role: "alert", class: "alert alert-error flex flex-col items-start gap-3",
            div { class: "flex items-center gap-2",
                Icon { width: 20, height: 20, icon: FaTriangleExclamation }
                p { class: "font-semibold", "{error}" }
            }
            if unauthorized {
                Link { to: Route::Login {}, class: "btn btn-sm", "Log in again" }
            } else {
                button {
                    class: "btn btn-sm",
                    onclick: move |_| on_retry.call(()),
                    "Try again"
                }
            }
        }
    )
}
