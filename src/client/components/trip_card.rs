use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaClock, FaLocationDot, FaPlay, FaStar};
use dioxus_free_icons::Icon;

use skyegypt::model::trip::TripDto;

/// Image shown when a trip has none
const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400?text=Sky+Egypt";

#[component]
pub fn TripCard(trip: TripDto) -> Element {
    let price = trip.price_summary();
    let image = trip
        .image
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let place = trip.location.clone().or_else(|| trip.city.clone());
    let badge = trip.kind.badge_class();
    let kind = trip.kind.label();
    let unit = trip.kind.price_unit();

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            figure { class: "relative h-48",
                img {
                    class: "w-full h-full object-cover",
                    src: "{image}",
                    alt: "{trip.name}",
                }
                span { class: "badge {badge} absolute top-2 left-2",
                    "{kind}"
                }
                if let Some(discount) = &trip.discount {
                    span { class: "badge badge-error absolute top-2 right-2",
                        "{discount}"
                    }
                }
            }
            div { class: "card-body gap-2",
                h2 { class: "card-title", "{trip.name}" }
                p { class: "text-sm line-clamp-3", "{trip.description}" }
                div { class: "flex flex-wrap gap-3 text-xs opacity-80",
                    if let Some(place) = place {
                        span { class: "flex items-center gap-1",
                            Icon { width: 12, height: 12, icon: FaLocationDot }
                            "{place}"
                        }
                    }
                    if let Some(duration) = &trip.duration {
                        span { class: "flex items-center gap-1",
                            Icon { width: 12, height: 12, icon: FaClock }
                            "{duration}"
                        }
                    }
                    span { class: "flex items-center gap-1",
                        Icon { width: 12, height: 12, icon: FaStar }
                        "{trip.rating} ({trip.reviews} reviews)"
                    }
                }
                div { class: "card-actions items-end justify-between mt-2",
                    div {
                        if let Some(original) = price.original {
                            p { class: "text-xs line-through opacity-60", "{original}" }
                        }
                        p { class: "text-lg font-bold",
                            "{price.headline} "
                            span { class: "text-xs font-normal", "{unit}" }
                        }
                    }
                    if let Some(video) = &trip.video {
                        a {
                            href: "{video}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "btn btn-sm btn-outline gap-1",
                            Icon { width: 12, height: 12, icon: FaPlay }
                            "Video"
                        }
                    }
                }
            }
        }
    )
}
