//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::guard::SessionGuard;
use crate::pages::{
    admin_generator::AdminGeneratorPage, console::ConsolePage, dashboard::DashboardPage,
    kyc::KycPage, login::LoginPage, users::UsersPage,
};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and nests every route except login under
/// the session guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One session object for the whole app; pages and the gateway client
    // read tokens from here instead of poking at storage themselves.
    let session = RwSignal::new(Session::load());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/kyc-admin.css"/>
        <Title text="KYC Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=SessionGuard>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=StaticSegment("kyc") view=KycPage/>
                    <Route path=StaticSegment("console") view=ConsolePage/>
                    <Route path=StaticSegment("admin-generator") view=AdminGeneratorPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
