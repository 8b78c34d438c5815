use dioxus::prelude::*;

use crate::client::{components::SkyEgyptTitle, router::Route};

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                SkyEgyptTitle {}
            }
            div {
                class: "navbar-end gap-2",
                a { href: "#trips", class: "btn btn-ghost", "Trips" }
                Link {
                    to: Route::Login {},
                    class: "btn btn-outline",
                    "Admin"
                }
            }
        }

        Outlet::<Route> {}
    }
}
