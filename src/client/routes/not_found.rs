use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Page not found | Sky Egypt" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 py-24",
                p { class: "text-4xl font-bold", "404" }
                p { "Nothing lives at /{path}" }
                Link { to: Route::Home {}, class: "btn btn-primary", "Back to trips" }
            }
        }
    )
}
