use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use skyegypt::model::trip::TripFilter;

use crate::client::{
    components::{admin::ErrorPanel, Page, TripCard},
    util::api::get_trips,
};

#[component]
pub fn Home() -> Element {
    let mut trips = use_resource(|| async move { get_trips().await });
    let mut filter = use_signal(TripFilter::default);

    let filters = TripFilter::ALL.into_iter().map(|option| {
        let class = if filter() == option {
            "btn btn-primary"
        } else {
            "btn btn-outline"
        };
        let label = option.label();

        rsx!(
            button {
                key: "{label}",
                class: "{class}",
                onclick: move |_| filter.set(option),
                "{label}"
            }
        )
    });

    let listing = match &*trips.read() {
        None => rsx!(
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for i in 0..6 {
                    div { key: "{i}", class: "skeleton h-96 w-full" }
                }
            }
        ),
        Some(Err(error)) => rsx!(ErrorPanel {
            error: error.clone(),
            on_retry: move |_| trips.restart(),
        }),
        Some(Ok(all)) => {
            let visible = filter().apply(all);

            if visible.is_empty() {
                rsx!(p { class: "text-center py-12 opacity-70", "No trips available" })
            } else {
                rsx!(
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for (i, trip) in visible.into_iter().enumerate() {
                            TripCard { key: "{i}", trip }
                        }
                    }
                )
            }
        }
    };

    rsx!(
        Title { "Sky Egypt | Hotels, Sea Trips & Safaris" }
        Meta {
            name: "description",
            content: "Book Red Sea hotels, sea trips, and desert safaris across Egypt."
        }
        Page {
            section { class: "hero min-h-[40vh] bg-base-200 rounded-box mb-8",
                div { class: "hero-content text-center",
                    div { class: "max-w-xl flex flex-col gap-4",
                        h1 { class: "text-4xl font-bold", "Discover Egypt by land and sea" }
                        p { "Hand-picked hotels, island hopping, and desert adventures, all in one place." }
                        a { href: "#trips", class: "btn btn-primary self-center", "Browse trips" }
                    }
                }
            }
            section { id: "trips", class: "flex flex-col gap-6",
                div { class: "flex flex-wrap gap-2 justify-center", {filters} }
                {listing}
            }
        }
    )
}
