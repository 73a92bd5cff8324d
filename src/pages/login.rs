//! Admin login page — the only route outside the session guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::AdminLoginRequest;
use crate::state::session::Session;

/// Login page. A successful `/admin/login` response stores the admin token
/// and moves on to the dashboard; failures show the backend's message.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let req = AdminLoginRequest::from_identifier(
            &identifier.get_untracked(),
            &password.get_untracked(),
        );
        pending.set(true);
        error.set(None);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let current = session.get_untracked();
            match api::admin_login(&current, &req).await {
                Ok(body) => {
                    session.update(|s| {
                        s.capture(&body);
                    });
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="login-page">
            <h1>"KYC Admin"</h1>
            <p class="login-page__subtitle">"Sign in with your admin credentials"</p>

            <form class="login-page__form" on:submit=on_submit>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="error-banner">{message}</div> })
                }}

                <label class="field">
                    "Email or username"
                    <input
                        type="text"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
