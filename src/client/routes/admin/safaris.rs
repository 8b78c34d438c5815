use dioxus::document::Title;
use dioxus::prelude::*;

use skyegypt::{
    model::safari::SafariDto,
    pipeline::format::{format_time, or_na},
};

use crate::client::components::admin::{render_inventory, use_inventory};

const HEADERS: [&str; 5] = ["Name", "Start", "End", "Price", "Total"];

#[component]
pub fn Safaris() -> Element {
    let inventory = use_inventory::<SafariDto>();

    let table = render_inventory(inventory, &HEADERS, |safari| {
        let start = safari.start_time.as_deref().map(format_time);
        let end = safari.end_time.as_deref().map(format_time);
        let start = or_na(start.as_deref()).to_string();
        let end = or_na(end.as_deref()).to_string();
        let price = or_na(safari.price.as_deref()).to_string();
        let total = or_na(safari.total_price.as_deref()).to_string();

        rsx!(
            td {
                div { class: "font-semibold", "{safari.name}" }
                div { class: "text-xs opacity-60 max-w-xs truncate", "{safari.description}" }
            }
            td { "{start}" }
            td { "{end}" }
            td { "{price}" }
            td { "{total}" }
        )
    });

    rsx!(
        Title { "Safaris | Sky Egypt Admin" }
        {table}
    )
}
