//! Session guard for protected routes.
//!
//! Every route except login is nested under [`SessionGuard`]. On each
//! render it checks whether an admin token is present in the session and
//! redirects to the login page when it is not. Presence is the whole
//! check: token expiry and validity are the backend's problem and only
//! surface when a later API call fails.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::Session;

/// Route of the login page, the only one the guard leaves open.
pub const LOGIN_PATH: &str = "/login";

/// Terminal render decision for one guarded route render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectToLogin,
}

/// Guard check progress; starts at `Checking` until the browser-side
/// effect has looked at the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardStatus {
    #[default]
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Decide what to do with a route render. The login route always renders;
/// everything else requires an admin token. Failure is a redirect, never
/// an error.
pub fn decide(path: &str, has_admin_token: bool) -> GuardDecision {
    if path == LOGIN_PATH || has_admin_token {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Layout component wrapping all protected routes; renders the matched
/// child route once the session check passes.
#[component]
pub fn SessionGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();
    let navigate = use_navigate();
    let status = RwSignal::new(GuardStatus::Checking);

    Effect::new(move || {
        let path = location.pathname.get();
        match decide(&path, session.get().is_admin_authenticated()) {
            GuardDecision::Render => status.set(GuardStatus::Authenticated),
            GuardDecision::RedirectToLogin => {
                status.set(GuardStatus::Unauthenticated);
                navigate(LOGIN_PATH, NavigateOptions::default());
            }
        }
    });

    view! {
        <Show
            when=move || status.get() == GuardStatus::Authenticated
            fallback=|| {
                view! {
                    <div class="guard-loading">
                        <p>"Loading..."</p>
                    </div>
                }
            }
        >
            <Outlet/>
        </Show>
    }
}
