use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaChartLine, FaHotel, FaMountainSun, FaRightFromBracket, FaShip,
};
use dioxus_free_icons::Icon;

use crate::client::{components::SkyEgyptTitle, router::Route, util::api::get_session};

/// Shell for every admin page; sends visitors without a session to the login screen
#[component]
pub fn AdminLayout() -> Element {
    let navigator = use_navigator();
    let session = use_resource(|| async move { get_session().await });

    use_effect(move || {
        if let Some(Ok(dto)) = &*session.read() {
            if !dto.authenticated {
                navigator.replace(Route::Login {});
            }
        }
    });

    rsx!(
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                SkyEgyptTitle {}
                span { class: "badge badge-neutral ml-2", "Admin" }
            }
            div {
                class: "navbar-end",
                a { href: "/api/auth/logout",
                    button {
                        class: "btn btn-outline gap-2",
                        Icon { width: 16, height: 16, icon: FaRightFromBracket }
                        "Logout"
                    }
                }
            }
        }
        div { class: "flex pt-[64px] min-h-screen",
            aside { class: "w-56 shrink-0 bg-base-200",
                ul { class: "menu w-full",
                    li {
                        Link { to: Route::Dashboard {}, active_class: "menu-active",
                            Icon { width: 16, height: 16, icon: FaChartLine }
                            "Dashboard"
                        }
                    }
                    li {
                        Link { to: Route::Hotels {}, active_class: "menu-active",
                            Icon { width: 16, height: 16, icon: FaHotel }
                            "Hotels"
                        }
                    }
                    li {
                        Link { to: Route::SeaTrips {}, active_class: "menu-active",
                            Icon { width: 16, height: 16, icon: FaShip }
                            "Sea Trips"
                        }
                    }
                    li {
                        Link { to: Route::Safaris {}, active_class: "menu-active",
                            Icon { width: 16, height: 16, icon: FaMountainSun }
                            "Safaris"
                        }
                    }
                }
            }
            main { class: "flex-1 p-6 overflow-x-auto",
                Outlet::<Route> {}
            }
        }
    )
}
