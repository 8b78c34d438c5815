use dioxus::document::Title;
use dioxus::prelude::*;

use skyegypt::{
    model::sea_trip::SeaTripDto,
    pipeline::format::{format_time, or_na},
};

use crate::client::components::admin::{render_inventory, use_inventory};

const HEADERS: [&str; 5] = ["Name", "Schedule", "Price", "Transportation", "Total"];

fn schedule(start: Option<&str>, end: Option<&str>) -> String {
    let start = start.map(format_time);
    let end = end.map(format_time);

    format!("{} - {}", or_na(start.as_deref()), or_na(end.as_deref()))
}

#[component]
pub fn SeaTrips() -> Element {
    let inventory = use_inventory::<SeaTripDto>();

    let table = render_inventory(inventory, &HEADERS, |trip| {
        let schedule = schedule(trip.start_time.as_deref(), trip.end_time.as_deref());
        let price = or_na(trip.price.as_deref()).to_string();
        let transportation = or_na(trip.transportation.as_deref()).to_string();
        let total = or_na(trip.total_price.as_deref()).to_string();
        let discount = trip.discount.clone().filter(|d| !d.is_empty());

        rsx!(
            td {
                div { class: "font-semibold", "{trip.name}" }
                div { class: "text-xs opacity-60 max-w-xs truncate", "{trip.description}" }
            }
            td { "{schedule}" }
            td { "{price}" }
            td { "{transportation}" }
            td {
                "{total}"
                if let Some(discount) = discount {
                    span { class: "badge badge-accent badge-sm ml-2", "{discount}" }
                }
            }
        )
    });

    rsx!(
        Title { "Sea Trips | Sky Egypt Admin" }
        {table}
    )
}
