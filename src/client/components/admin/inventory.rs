use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPenToSquare;
use dioxus_free_icons::Icon;

use skyegypt::{
    model::inventory::InventoryRecord,
    pipeline::{list_view, normalize::decode_records},
};

use crate::client::{
    components::admin::{
        EditDrawer, EditTarget, EmptyRow, ErrorPanel, PaginationFooter, SearchToolbar,
    },
    util::api::{get_records, ApiError},
};

/// Fetched records plus the table state of one inventory page
pub struct Inventory<T: 'static> {
    pub records: Resource<Result<Vec<T>, ApiError>>,
    pub query: Signal<String>,
    pub page: Signal<usize>,
    pub editing: Signal<Option<EditTarget>>,
}

impl<T> Clone for Inventory<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Inventory<T> {}

pub fn use_inventory<T: InventoryRecord>() -> Inventory<T> {
    let records = use_resource(|| async move {
        get_records(T::RESOURCE)
            .await
            .map(|list| decode_records::<T>(list.records))
    });

    Inventory {
        records,
        query: use_signal(String::new),
        page: use_signal(|| 1),
        editing: use_signal(|| None),
    }
}

/// Toolbar, searchable paginated table, and edit drawer for one collection.
///
/// `row` renders the data cells of a record; the edit action cell is appended here.
pub fn render_inventory<T: InventoryRecord>(
    inventory: Inventory<T>,
    headers: &[&'static str],
    row: impl Fn(&T) -> Element,
) -> Element {
    let resource = T::RESOURCE;
    let noun = resource.noun();
    let Inventory {
        mut records,
        query,
        page,
        mut editing,
    } = inventory;
    let colspan = headers.len() + 1;

    let (rows, pagination) = match &*records.read() {
        None => (
            rsx!(
                tr {
                    td { colspan: "{colspan}", class: "text-center py-8",
                        span { class: "loading loading-spinner" }
                    }
                }
            ),
            None,
        ),
        Some(Err(error)) => {
            return rsx!(ErrorPanel {
                error: error.clone(),
                on_retry: move |_| records.restart(),
            });
        }
        Some(Ok(all)) => {
            let view = list_view(all, &query.read(), page());

            let rows = if view.rows.is_empty() {
                rsx!(EmptyRow {
                    colspan,
                    noun,
                    searching: !query.read().trim().is_empty(),
                })
            } else {
                let rendered = view.rows.iter().enumerate().map(|(i, record)| {
                    let target = EditTarget::edit(record);
                    let key = record.id().map(str::to_string).unwrap_or_else(|| i.to_string());

                    rsx!(
                        tr { key: "{key}",
                            {row(record)}
                            td {
                                button {
                                    class: "btn btn-ghost btn-sm",
                                    onclick: move |_| editing.set(Some(target.clone())),
                                    Icon { width: 14, height: 14, icon: FaPenToSquare }
                                }
                            }
                        }
                    )
                });

                rsx!({rendered})
            };

            (rows, Some(view.pagination))
        }
    };

    let headers = headers.iter().map(|header| rsx!(th { key: "{header}", "{header}" }));

    rsx!(
        SearchToolbar {
            title: resource.label(),
            singular: resource.singular(),
            query,
            on_add: move |_| editing.set(Some(EditTarget::create(resource))),
        }
        div { class: "overflow-x-auto rounded-box border border-base-300",
            table { class: "table table-zebra",
                thead {
                    tr {
                        {headers}
                        th { class: "w-16" }
                    }
                }
                tbody { {rows} }
            }
        }
        if let Some(pagination) = pagination {
            PaginationFooter { pagination, noun, page }
        }
        if let Some(target) = editing() {
            EditDrawer {
                resource,
                target,
                on_close: move |_| editing.set(None),
                on_saved: move |_| {
                    editing.set(None);
                    records.restart();
                },
            }
        }
    )
}
