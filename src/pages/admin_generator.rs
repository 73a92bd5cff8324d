//! Admin generator page: provision a new admin account and show its
//! one-time credentials.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::api;
use crate::net::types::{
    AdminCredentials, GenerateAdminRequest, GeneratedAdmin, error_message,
    extract_generated_admin, is_success, non_empty,
};
use crate::state::session::Session;
use crate::util::browser;

/// Admin generator page.
///
/// The generated password is shown exactly once, in the response panel;
/// the backend only stores a hash of it.
#[component]
pub fn AdminGeneratorPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let use_custom_password = RwSignal::new(false);
    let custom_password = RwSignal::new(String::new());

    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let result = RwSignal::new(None::<(GeneratedAdmin, AdminCredentials)>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let req = GenerateAdminRequest {
            email: non_empty(&email.get_untracked()),
            username: non_empty(&username.get_untracked()),
            custom_password: if use_custom_password.get_untracked() {
                non_empty(&custom_password.get_untracked())
            } else {
                None
            },
        };

        loading.set(true);
        error.set(None);
        result.set(None);

        leptos::task::spawn_local(async move {
            let current = session.get_untracked();
            match api::generate_admin(&current, &req).await {
                Ok(body) => {
                    if is_success(&body) {
                        match extract_generated_admin(&body) {
                            Some(generated) => {
                                result.set(Some(generated));
                                email.set(String::new());
                                username.set(String::new());
                                custom_password.set(String::new());
                                use_custom_password.set(false);
                            }
                            None => error.set(Some(
                                "Malformed response from admin generation".to_owned(),
                            )),
                        }
                    } else {
                        let message = error_message(&body)
                            .unwrap_or("Failed to generate admin")
                            .to_owned();
                        error.set(Some(message));
                    }
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="page">
            <Navbar/>
            <main class="page__main">
                <header class="page__header">
                    <div>
                        <h1>"Generate Admin User"</h1>
                        <p class="page__subtitle">
                            "Create a new admin account with auto-generated credentials"
                        </p>
                    </div>
                </header>

                <div class="generator">
                    <form class="generator__form" on:submit=on_submit>
                        <h2>"Admin Details"</h2>

                        {move || {
                            error
                                .get()
                                .map(|message| view! { <div class="error-banner">{message}</div> })
                        }}

                        <label class="field">
                            "Email (optional)"
                            <input
                                type="email"
                                placeholder="admin@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="field">
                            "Username (optional)"
                            <input
                                type="text"
                                placeholder="generated if omitted"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="field field--checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || use_custom_password.get()
                                on:change=move |_| use_custom_password.update(|v| *v = !*v)
                            />
                            "Use a custom password"
                        </label>

                        {move || {
                            use_custom_password
                                .get()
                                .then(|| {
                                    view! {
                                        <label class="field">
                                            "Custom password"
                                            <input
                                                type="password"
                                                prop:value=move || custom_password.get()
                                                on:input=move |ev| {
                                                    custom_password.set(event_target_value(&ev));
                                                }
                                            />
                                        </label>
                                    }
                                })
                        }}

                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || loading.get()
                        >
                            {move || if loading.get() { "Generating..." } else { "Generate Admin" }}
                        </button>
                    </form>

                    {move || {
                        result
                            .get()
                            .map(|(admin, credentials)| {
                                view! { <GeneratedAdminCard admin=admin credentials=credentials/> }
                            })
                    }}
                </div>
            </main>
        </div>
    }
}

/// Result panel showing the new account and its one-time credentials.
#[component]
fn GeneratedAdminCard(admin: GeneratedAdmin, credentials: AdminCredentials) -> impl IntoView {
    let show_password = RwSignal::new(false);
    let password = credentials.password.clone();
    let password_for_copy = credentials.password.clone();

    view! {
        <div class="generator__result">
            <h2>"Admin Created"</h2>
            <div class="dialog__grid">
                <div class="dialog__field">
                    <label>"ID"</label>
                    <p>{admin.id}</p>
                </div>
                <div class="dialog__field">
                    <label>"Username"</label>
                    <p>{admin.username.clone()}</p>
                </div>
                <div class="dialog__field">
                    <label>"Email"</label>
                    <p>{admin.email}</p>
                </div>
                <div class="dialog__field">
                    <label>"Role"</label>
                    <p>{admin.role}</p>
                </div>
            </div>

            <h3>"One-time credentials"</h3>
            <div class="generator__credentials">
                <code class="generator__password">
                    {move || {
                        if show_password.get() {
                            password.clone()
                        } else {
                            "••••••••".to_owned()
                        }
                    }}
                </code>
                <button class="btn" on:click=move |_| show_password.update(|v| *v = !*v)>
                    {move || if show_password.get() { "Hide" } else { "Show" }}
                </button>
                <button
                    class="btn"
                    on:click=move |_| browser::copy_to_clipboard(&password_for_copy)
                >
                    "Copy Password"
                </button>
                <button
                    class="btn"
                    on:click={
                        let username = admin.username.clone();
                        move |_| browser::copy_to_clipboard(&username)
                    }
                >
                    "Copy Username"
                </button>
            </div>
            <p class="generator__note">
                "Save these now — the password is not retrievable later."
            </p>
        </div>
    }
}
