//! Top navigation bar with active-route highlighting and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::guard::LOGIN_PATH;
use crate::net::api;
use crate::state::session::Session;

const LINKS: [(&str, &str); 5] = [
    ("/", "Dashboard"),
    ("/users", "Users"),
    ("/kyc", "KYC"),
    ("/console", "API Console"),
    ("/admin-generator", "Admin Generator"),
];

/// Navigation bar shown on every protected page.
///
/// Logout clears both stored tokens immediately; the backend call is fire
/// and forget since the session guard redirects regardless of its outcome.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_logout = move |_| {
        let current = session.get_untracked();
        leptos::task::spawn_local(async move {
            let _ = api::logout(&current).await;
        });
        session.update(Session::clear);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                "KYC Admin"
            </a>
            <div class="navbar__links">
                {LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        let active = move || pathname.get() == href;
                        view! {
                            <a href=href class="navbar__link" class:navbar__link--active=active>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button class="navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
