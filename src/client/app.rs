use dioxus::prelude::*;

use crate::client::router::Route;

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const DAISYUI_THEMES_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5/themes.css";
const TAILWIND_BROWSER_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Sky Egypt" }
        document::Stylesheet { href: DAISYUI_CSS }
        document::Stylesheet { href: DAISYUI_THEMES_CSS }
        document::Script { src: TAILWIND_BROWSER_JS }

        Router::<Route> {}
    }
}
