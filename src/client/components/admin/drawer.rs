use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaTrash, FaXmark};
use dioxus_free_icons::Icon;

use skyegypt::model::{
    inventory::{InventoryRecord, RecordFormDto},
    resource::{FieldKind, Resource},
};

use crate::client::util::api::{delete_record, save_record};

/// The record a drawer is open for
#[derive(Clone, Debug, PartialEq)]
pub struct EditTarget {
    /// `None` while creating
    pub id: Option<String>,
    pub form: RecordFormDto,
}

impl EditTarget {
    pub fn create(resource: Resource) -> Self {
        Self {
            id: None,
            form: RecordFormDto::empty(resource),
        }
    }

    pub fn edit<T: InventoryRecord>(record: &T) -> Self {
        Self {
            id: record.id().map(str::to_string),
            form: record.to_form(),
        }
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Number => "number",
        FieldKind::Time => "time",
        FieldKind::Url => "url",
        FieldKind::Text | FieldKind::LongText => "text",
    }
}

/// Side drawer that creates, updates, or deletes one record.
///
/// `on_saved` fires after any successful mutation so the page can re-fetch its collection.
#[component]
pub fn EditDrawer(
    resource: Resource,
    target: EditTarget,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let mut form = use_signal(|| target.form.clone());
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let mut confirming_delete = use_signal(|| false);

    let id = target.id.clone();
    let singular = resource.singular();
    let heading = match &id {
        Some(_) => format!("Edit {}", resource.singular()),
        None => format!("Add {}", resource.singular()),
    };

    let save_id = id.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let missing = resource
            .fields()
            .iter()
            .find(|spec| spec.required && form.read().get(spec.name).trim().is_empty());
        if let Some(spec) = missing {
            error.set(Some(format!("{} is required", spec.label)));
            return;
        }

        let id = save_id.clone();
        let submitted = form.read().clone();
        busy.set(true);
        error.set(None);

        spawn(async move {
            let result = save_record(resource, id.as_deref(), &submitted).await;
            busy.set(false);

            match result {
                Ok(()) => on_saved.call(()),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let delete_id = id.clone();
    let confirm_delete = move |_: MouseEvent| {
        let Some(id) = delete_id.clone() else {
            return;
        };
        busy.set(true);
        error.set(None);

        spawn(async move {
            let result = delete_record(resource, &id).await;
            busy.set(false);

            match result {
                Ok(()) => on_saved.call(()),
                Err(err) => {
                    confirming_delete.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let fields = resource.fields().iter().map(|spec| {
        let name = spec.name;
        let value = form.read().get(name).to_string();
        let label = if spec.required {
            format!("{} *", spec.label)
        } else {
            spec.label.to_string()
        };

        let control = match spec.kind {
            FieldKind::LongText => rsx!(
                textarea {
                    class: "textarea w-full",
                    rows: 4,
                    value: "{value}",
                    oninput: move |evt| form.write().set(name, evt.value()),
                }
            ),
            kind => rsx!(
                input {
                    class: "input w-full",
                    r#type: input_type(kind),
                    step: "any",
                    value: "{value}",
                    oninput: move |evt| form.write().set(name, evt.value()),
                }
            ),
        };

        rsx!(
            fieldset { key: "{name}", class: "fieldset",
                legend { class: "fieldset-legend", "{label}" }
                {control}
            }
        )
    });

    rsx!(
        div { class: "fixed inset-0 z-30 flex justify-end",
            div {
                class: "absolute inset-0 bg-black/40",
                onclick: move |_| on_close.call(()),
            }
            aside { class: "relative w-full max-w-md h-full bg-base-100 p-6 overflow-y-auto shadow-xl",
                div { class: "flex items-center justify-between mb-4",
                    h2 { class: "text-xl font-bold", "{heading}" }
                    button {
                        class: "btn btn-ghost btn-sm btn-circle",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 16, height: 16, icon: FaXmark }
                    }
                }
                if let Some(message) = error() {
                    div { role: "alert", class: "alert alert-error mb-4", "{message}" }
                }
                form { class: "flex flex-col gap-2", onsubmit: submit,
                    {fields}
                    div { class: "flex gap-2 mt-4",
                        button {
                            class: "btn btn-primary flex-1",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() { "Saving..." } else { "Save" }
                        }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                    }
                }
                if id.is_some() {
                    div { class: "divider" }
                    if confirming_delete() {
                        div { class: "flex flex-col gap-2",
                            p { "Delete this {singular}? This cannot be undone." }
                            div { class: "flex gap-2",
                                button {
                                    class: "btn btn-error flex-1",
                                    disabled: busy(),
                                    onclick: confirm_delete,
                                    "Delete"
                                }
                                button {
                                    class: "btn btn-ghost",
                                    onclick: move |_| confirming_delete.set(false),
                                    "Keep"
                                }
                            }
                        }
                    } else {
                        button {
                            class: "btn btn-outline btn-error w-full gap-2",
                            onclick: move |_| confirming_delete.set(true),
                            Icon { width: 14, height: 14, icon: FaTrash }
                            "Delete {singular}"
                        }
                    }
                }
            }
        }
    )
}
