//! Dashboard page with aggregate stat cards and a backend health check.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::api::ApiError;
use crate::net::{api, types};
use crate::state::session::Session;
use crate::state::stats::Overview;

/// Fetch health and the user list, folding both into one overview. Either
/// call may fail on its own; the overview degrades instead of erroring.
async fn load_overview(session: Session) -> Overview {
    let health = api::health(&session).await;
    let users: Result<_, ApiError> = api::list_users(&session)
        .await
        .map(|body| types::extract_users(&body));
    Overview::from_results(&health, &users)
}

/// Dashboard page — stat cards over `/health` and `/user/all`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let overview = LocalResource::new(move || load_overview(session.get_untracked()));

    let cards = move || {
        overview.get().map(|o| {
            vec![
                ("Total Users", o.stats.total_users.to_string()),
                ("Verified Users", o.stats.verified_users.to_string()),
                ("Pending KYC", o.stats.pending_kyc.to_string()),
                ("Completed KYC", o.stats.completed_kyc.to_string()),
                ("Server Status", o.server.label().to_owned()),
            ]
        })
    };

    view! {
        <div class="page">
            <Navbar/>
            <main class="page__main">
                <header class="page__header">
                    <div>
                        <h1>"Dashboard"</h1>
                        <p class="page__subtitle">"Overview of the KYC backend"</p>
                    </div>
                    <button class="btn btn--primary" on:click=move |_| overview.refetch()>
                        "Refresh"
                    </button>
                </header>

                <Suspense fallback=move || {
                    view! { <p class="page__loading">"Loading statistics..."</p> }
                }>
                    {move || {
                        cards()
                            .map(|cards| {
                                view! {
                                    <div class="stat-grid">
                                        {cards
                                            .into_iter()
                                            .map(|(title, value)| {
                                                view! {
                                                    <div class="stat-card">
                                                        <p class="stat-card__title">{title}</p>
                                                        <p class="stat-card__value">{value}</p>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
