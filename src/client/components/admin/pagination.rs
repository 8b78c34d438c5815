use dioxus::prelude::*;

use skyegypt::pipeline::paginate::Pagination;

/// "Showing x to y of z" with Prev/Next; hidden when everything fits on one page
#[component]
pub fn PaginationFooter(pagination: Pagination, noun: &'static str, mut page: Signal<usize>) -> Element {
    if !pagination.is_needed() {
        return rsx!();
    }

    let summary = pagination.summary(noun);

    rsx!(
        div { class: "flex items-center justify-between mt-4",
            p { class: "text-sm opacity-80", "{summary}" }
            div { class: "join",
                button {
                    class: "join-item btn btn-sm",
                    disabled: !pagination.has_prev(),
                    onclick: move |_| page -= 1,
                    "Prev"
                }
                button { class: "join-item btn btn-sm btn-disabled", "{pagination.page}" }
                button {
                    class: "join-item btn btn-sm",
                    disabled: !pagination.has_next(),
                    onclick: move |_| page += 1,
                    "Next"
                }
            }
        }
    )
}

/// Table row shown when no record is visible
#[component]
pub fn EmptyRow(colspan: usize, noun: &'static str, searching: bool) -> Element {
    let message = if searching {
        format!("No {} found matching your search", noun)
    } else {
        format!("No {} available", noun)
    };

    rsx!(
        tr {
            td { colspan: "{colspan}", class: "text-center py-8 opacity-70", "{message}" }
        }
    )
}
