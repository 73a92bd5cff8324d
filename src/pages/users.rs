//! Users page listing every registered user with a details dialog.

use leptos::prelude::*;

use crate::components::badge::StatusBadge;
use crate::components::navbar::Navbar;
use crate::net::api::{self, ApiError};
use crate::net::types::{UserRecord, extract_users};
use crate::state::session::Session;
use crate::util::format::{format_date, or_na};

async fn load_users(session: Session) -> Result<Vec<UserRecord>, ApiError> {
    api::list_users(&session)
        .await
        .map(|body| extract_users(&body))
}

/// Users page — full table of registered users from `GET /user/all`.
#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let users = LocalResource::new(move || load_users(session.get_untracked()));
    let selected = RwSignal::new(None::<UserRecord>);

    view! {
        <div class="page">
            <Navbar/>
            <main class="page__main">
                <header class="page__header">
                    <div>
                        <h1>"Users"</h1>
                        <p class="page__subtitle">"Manage all registered users"</p>
                    </div>
                    <button class="btn btn--primary" on:click=move |_| users.refetch()>
                        "Refresh"
                    </button>
                </header>

                <Suspense fallback=move || {
                    view! { <p class="page__loading">"Loading users..."</p> }
                }>
                    {move || {
                        users
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    if list.is_empty() {
                                        view! { <p class="page__empty">"No users found"</p> }
                                            .into_any()
                                    } else {
                                        view! {
                                            <ul class="record-list">
                                                {list
                                                    .into_iter()
                                                    .map(|user| {
                                                        let for_dialog = user.clone();
                                                        view! {
                                                            <li class="record-list__row">
                                                                <div class="record-list__who">
                                                                    <p class="record-list__name">
                                                                        {user.display_name()}
                                                                    </p>
                                                                    <p class="record-list__contact">
                                                                        {user.contact()}
                                                                    </p>
                                                                    <p class="record-list__meta">
                                                                        {format!(
                                                                            "Role: {} • Joined: {}",
                                                                            or_na(user.role.as_deref()),
                                                                            format_date(user.created_at.as_deref()),
                                                                        )}
                                                                    </p>
                                                                </div>
                                                                <div class="record-list__actions">
                                                                    {user
                                                                        .is_verified
                                                                        .then(|| {
                                                                            view! {
                                                                                <span class="badge badge--verified">"verified"</span>
                                                                            }
                                                                        })}
                                                                    <StatusBadge status=user.status()/>
                                                                    <button
                                                                        class="btn btn--link"
                                                                        on:click=move |_| selected.set(
                                                                            Some(for_dialog.clone()),
                                                                        )
                                                                    >
                                                                        "View Details"
                                                                    </button>
                                                                </div>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        }
                                            .into_any()
                                    }
                                }
                                Err(e) => {
                                    view! { <div class="error-banner">{e.to_string()}</div> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </main>

            {move || {
                selected
                    .get()
                    .map(|user| {
                        view! {
                            <UserDetailsDialog
                                user=user
                                on_close=Callback::new(move |()| selected.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Modal dialog showing the full user record.
#[component]
fn UserDetailsDialog(user: UserRecord, on_close: Callback<()>) -> impl IntoView {
    let rows = vec![
        ("Name", user.display_name()),
        ("Email", or_na(user.email.as_deref())),
        ("Phone", or_na(user.phone.as_deref())),
        ("Role", or_na(user.role.as_deref())),
        ("Verified", (if user.is_verified { "yes" } else { "no" }).to_owned()),
        ("KYC Status", user.status().as_str().to_owned()),
        ("Date of Birth", format_date(user.dob.as_deref())),
        ("Address", or_na(user.address.as_deref())),
        ("Created", format_date(user.created_at.as_deref())),
        ("Updated", format_date(user.updated_at.as_deref())),
    ];

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>"User Details"</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <div class="dialog__grid">
                    {rows
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="dialog__field">
                                    <label>{label}</label>
                                    <p>{value}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
