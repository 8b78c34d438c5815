use dioxus::document::Title;
use dioxus::prelude::*;

use skyegypt::{model::hotel::HotelDto, pipeline::format::or_na};

use crate::client::components::admin::{render_inventory, use_inventory};

const HEADERS: [&str; 4] = ["Name", "City", "Location", "Price"];

#[component]
pub fn Hotels() -> Element {
    let inventory = use_inventory::<HotelDto>();

    let table = render_inventory(inventory, &HEADERS, |hotel| {
        let city = or_na(hotel.city.as_deref()).to_string();
        let location = or_na(hotel.location.as_deref()).to_string();
        let price = or_na(hotel.price.as_deref()).to_string();

        rsx!(
            td {
                div { class: "font-semibold", "{hotel.name}" }
                div { class: "text-xs opacity-60 max-w-xs truncate", "{hotel.description}" }
            }
            td { "{city}" }
            td { "{location}" }
            td { "{price}" }
        )
    });

    rsx!(
        Title { "Hotels | Sky Egypt Admin" }
        {table}
    )
}
