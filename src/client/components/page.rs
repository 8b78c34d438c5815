use dioxus::prelude::*;

/// Full-height content area below the fixed navbar
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen pt-[64px] {class}",
            div { class: "w-full max-w-[1440px] mx-auto p-4",
                {children}
            }
        }
    )
}
