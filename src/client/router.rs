use dioxus::prelude::*;

use crate::client::{
    components::{admin::AdminLayout, Navbar},
    routes::{
        admin::{Dashboard, Hotels, Login, Safaris, SeaTrips},
        Home, NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[end_layout]

    #[route("/admin/login")]
    Login {},

    #[nest("/admin")]

        #[layout(AdminLayout)]

        #[route("/dashboard")]
        Dashboard {},

        #[route("/hotels")]
        Hotels {},

        #[route("/seatrips")]
        SeaTrips {},

        #[route("/safaris")]
        Safaris {},

        #[end_layout]

    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
