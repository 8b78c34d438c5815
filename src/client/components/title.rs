use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlaneDeparture;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn SkyEgyptTitle() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2",
                Icon {
                    width: 20,
                    height: 20,
                    icon: FaPlaneDeparture
                }
                p { class: "text-xl font-bold",
                    "Sky Egypt"
                }
            }
        }
    )
}
