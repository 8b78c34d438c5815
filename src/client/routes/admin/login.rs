use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaLock, FaUser};
use dioxus_free_icons::Icon;

use skyegypt::model::api::LoginDto;

use crate::client::{components::SkyEgyptTitle, router::Route, util::api::login};

#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let mut credentials = use_signal(LoginDto::default);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let dto = credentials();
        busy.set(true);
        error.set(None);

        spawn(async move {
            match login(&dto).await {
                Ok(_) => {
                    navigator.push(Route::Dashboard {});
                }
                Err(err) => {
                    busy.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx!(
        Title { "Admin login | Sky Egypt" }
        div { class: "min-h-screen flex items-center justify-center bg-base-200 p-4",
            div { class: "card bg-base-100 shadow-md w-full max-w-sm",
                div { class: "card-body gap-4",
                    div { class: "flex justify-center", SkyEgyptTitle {} }
                    h1 { class: "text-center text-lg font-semibold", "Sign in to the admin console" }
                    if let Some(message) = error() {
                        div { role: "alert", class: "alert alert-error", "{message}" }
                    }
                    form { class: "flex flex-col gap-3", onsubmit: submit,
                        label { class: "input w-full",
                            Icon { width: 14, height: 14, icon: FaUser }
                            input {
                                r#type: "text",
                                placeholder: "Username",
                                autocomplete: "username",
                                required: true,
                                value: "{credentials.read().username}",
                                oninput: move |evt| credentials.write().username = evt.value(),
                            }
                        }
                        label { class: "input w-full",
                            Icon { width: 14, height: 14, icon: FaLock }
                            input {
                                r#type: "password",
                                placeholder: "Password",
                                autocomplete: "current-password",
                                required: true,
                                value: "{credentials.read().password}",
                                oninput: move |evt| credentials.write().password = evt.value(),
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() { "Signing in..." } else { "Sign in" }
                        }
                    }
                }
            }
        }
    )
}
