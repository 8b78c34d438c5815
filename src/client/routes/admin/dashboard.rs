use dioxus::document::Title;
use dioxus::prelude::*;

use skyegypt::{model::dashboard::DashboardTabDto, pipeline::columns::cell_text};

use crate::client::{components::admin::ErrorPanel, util::api::get_dashboard};

fn preview_table(tab: &DashboardTabDto) -> Element {
    if tab.rows.is_empty() {
        let noun = tab.resource.noun();
        return rsx!(p { class: "py-8 text-center opacity-70", "No {noun} available" });
    }

    let headers = tab
        .columns
        .iter()
        .map(|column| rsx!(th { key: "{column}", "{column}" }));

    let rows = tab.rows.iter().enumerate().map(|(i, row)| {
        let cells = tab.columns.iter().map(|column| {
            let text = cell_text(row.get(column));
            rsx!(td { key: "{column}", class: "max-w-xs truncate", "{text}" })
        });

        rsx!(tr { key: "{i}", {cells} })
    });

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-sm",
                thead { tr { {headers} } }
                tbody { {rows} }
            }
        }
    )
}

#[component]
pub fn Dashboard() -> Element {
    let mut dashboard = use_resource(|| async move { get_dashboard().await });
    let mut active = use_signal(|| 0usize);

    let content = match &*dashboard.read() {
        None => rsx!(
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                for i in 0..3 {
                    div { key: "{i}", class: "skeleton h-28 w-full" }
                }
            }
        ),
        Some(Err(error)) => rsx!(ErrorPanel {
            error: error.clone(),
            on_retry: move |_| dashboard.restart(),
        }),
        Some(Ok(overview)) => {
            let stats = overview.tabs.iter().map(|tab| {
                let noun = tab.resource.noun();
                rsx!(
                    div { key: "{tab.label}", class: "stat bg-base-100 rounded-box shadow-sm",
                        div { class: "stat-title", "{tab.label}" }
                        div { class: "stat-value", "{tab.total}" }
                        div { class: "stat-desc", "{noun} listed" }
                    }
                )
            });

            let tabs = overview.tabs.iter().enumerate().map(|(i, tab)| {
                let class = if active() == i { "tab tab-active" } else { "tab" };
                rsx!(
                    button {
                        key: "{tab.label}",
                        role: "tab",
                        class: "{class}",
                        onclick: move |_| active.set(i),
                        "{tab.label}"
                    }
                )
            });

            let table = overview
                .tabs
                .get(active())
                .map(preview_table)
                .unwrap_or_else(|| rsx!());

            rsx!(
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-4 mb-8", {stats} }
                div { role: "tablist", class: "tabs tabs-border mb-4", {tabs} }
                {table}
            )
        }
    };

    rsx!(
        Title { "Dashboard | Sky Egypt Admin" }
        h1 { class: "text-2xl font-bold mb-6", "Dashboard" }
        {content}
    )
}
