use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaPlus};
use dioxus_free_icons::Icon;

/// Title, search box, and "Add" button above an inventory table
#[component]
pub fn SearchToolbar(
    title: &'static str,
    singular: &'static str,
    mut query: Signal<String>,
    on_add: EventHandler<()>,
) -> Element {
    rsx!(
        div { class: "flex flex-wrap items-center justify-between gap-4 mb-4",
            h1 { class: "text-2xl font-bold", "{title}" }
            div { class: "flex gap-2",
                label { class: "input",
                    Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                    input {
                        r#type: "search",
                        placeholder: "Search by name or description",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary gap-2",
                    onclick: move |_| on_add.call(()),
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Add {singular}"
                }
            }
        }
    )
}
