//! KYC review page: list submissions, filter by status, approve or reject
//! pending ones after an explicit confirmation.

use leptos::prelude::*;

use crate::components::badge::StatusBadge;
use crate::components::navbar::Navbar;
use crate::net::api::{self, ApiError};
use crate::net::types::{UpdateKycStatusRequest, UserRecord, extract_users};
use crate::state::kyc::{self, KycFilter, ReviewAction};
use crate::state::session::Session;
use crate::util::browser;
use crate::util::format::{format_date, or_na};

async fn load_submissions(session: Session) -> Result<Vec<UserRecord>, ApiError> {
    api::list_users(&session)
        .await
        .map(|body| kyc::submissions(&extract_users(&body)))
}

/// KYC review page.
///
/// The status transition is one-way: only pending submissions offer
/// approve/reject, and a successful update refetches the list so the
/// record leaves the pending view. A failed update keeps the list as it
/// was and only raises the error banner.
#[component]
pub fn KycPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let subs = LocalResource::new(move || load_submissions(session.get_untracked()));
    let filter = RwSignal::new(KycFilter::All);
    let error = RwSignal::new(None::<String>);
    let updating = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<UserRecord>);

    let counts = move || {
        subs.get()
            .and_then(Result::ok)
            .map(|list| kyc::status_counts(&list))
            .unwrap_or_default()
    };

    // Shared by the list rows and the details dialog.
    let review = Callback::new(move |(user_id, action): (String, ReviewAction)| {
        if !browser::confirm(action.confirm_prompt()) {
            return;
        }

        updating.set(Some(user_id.clone()));
        error.set(None);
        let req = UpdateKycStatusRequest {
            user_id,
            status: action.target_status(),
        };

        leptos::task::spawn_local(async move {
            let current = session.get_untracked();
            match api::update_kyc_status(&current, &req).await {
                Ok(_) => {
                    selected.set(None);
                    subs.refetch();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            updating.set(None);
        });
    });

    view! {
        <div class="page">
            <Navbar/>
            <main class="page__main">
                <header class="page__header">
                    <div>
                        <h1>"KYC Management"</h1>
                        <p class="page__subtitle">"Review and manage KYC submissions"</p>
                    </div>
                    <button class="btn btn--primary" on:click=move |_| subs.refetch()>
                        "Refresh"
                    </button>
                </header>

                <nav class="filter-tabs">
                    {KycFilter::ALL
                        .into_iter()
                        .map(|f| {
                            view! {
                                <button
                                    class="filter-tabs__tab"
                                    class:filter-tabs__tab--active=move || filter.get() == f
                                    on:click=move |_| filter.set(f)
                                >
                                    {move || format!("{} ({})", f.label(), counts().of(f))}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="error-banner">{message}</div> })
                }}

                <Suspense fallback=move || {
                    view! { <p class="page__loading">"Loading KYC data..."</p> }
                }>
                    {move || {
                        subs.get()
                            .map(|result| match result {
                                Ok(list) => {
                                    let visible = kyc::filtered(&list, filter.get());
                                    if visible.is_empty() {
                                        view! {
                                            <p class="page__empty">"No KYC submissions found"</p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <ul class="record-list">
                                                {visible
                                                    .into_iter()
                                                    .map(|user| {
                                                        view! {
                                                            <SubmissionRow
                                                                user=user
                                                                review=review
                                                                updating=updating
                                                                selected=selected
                                                            />
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
                            <KycDetailsDialog
                                user=user
                                review=review
                                updating=updating
                                on_close=Callback::new(move |()| selected.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

/// One submission in the review list.
#[component]
fn SubmissionRow(
    user: UserRecord,
    review: Callback<(String, ReviewAction)>,
    updating: RwSignal<Option<String>>,
    selected: RwSignal<Option<UserRecord>>,
) -> impl IntoView {
    let for_dialog = user.clone();
    let meta = format!(
        "ID Type: {} • Submitted: {}",
        or_na(user.government_id_type.as_deref()),
        format_date(user.created_at.as_deref()),
    );

    let in_flight = {
        let id = user.id.clone();
        move || updating.get().as_deref() == Some(id.as_str())
    };

    view! {
        <li class="record-list__row">
            <div class="record-list__who">
                <p class="record-list__name">{user.display_name()}</p>
                <p class="record-list__contact">{user.contact()}</p>
                <p class="record-list__meta">{meta}</p>
            </div>
            <div class="record-list__actions">
                <StatusBadge status=user.status()/>
                {kyc::can_review(&user)
                    .then(|| {
                        [ReviewAction::Approve, ReviewAction::Reject]
                            .into_iter()
                            .map(|action| {
                                let id = user.id.clone();
                                let in_flight = in_flight.clone();
                                let pending_label = in_flight.clone();
                                let class = match action {
                                    ReviewAction::Approve => "btn btn--approve",
                                    ReviewAction::Reject => "btn btn--reject",
                                };
                                view! {
                                    <button
                                        class=class
                                        disabled=in_flight
                                        on:click=move |_| review.run((id.clone(), action))
                                    >
                                        {move || {
                                            if pending_label() { "Updating..." } else { action.label() }
                                        }}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    })}
                <button class="btn btn--link" on:click=move |_| selected.set(Some(for_dialog.clone()))>
                    "View Details"
                </button>
            </div>
        </li>
    }
}

/// Modal dialog with the full submission, including document references.
#[component]
fn KycDetailsDialog(
    user: UserRecord,
    review: Callback<(String, ReviewAction)>,
    updating: RwSignal<Option<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let rows = vec![
        ("Name", user.display_name()),
        ("Email", or_na(user.email.as_deref())),
        ("Phone", or_na(user.phone.as_deref())),
        ("Date of Birth", format_date(user.dob.as_deref())),
        ("ID Type", or_na(user.government_id_type.as_deref())),
        ("Status", user.status().as_str().to_owned()),
        ("Address", or_na(user.address.as_deref())),
    ];

    let documents: Vec<(&str, String)> = [
        ("Profile Photo", user.profile_photo.clone()),
        ("ID Front", user.government_id_front.clone()),
        ("ID Back", user.government_id_back.clone()),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.map(|u| (label, u)))
    .collect();

    let reviewable = kyc::can_review(&user);
    let in_flight = {
        let id = user.id.clone();
        move || updating.get().as_deref() == Some(id.as_str())
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>"KYC Details"</h2>
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

                <div class="dialog__documents">
                    {documents
                        .into_iter()
                        .map(|(label, url)| {
                            view! {
                                <div class="dialog__field">
                                    <label>{label}</label>
                                    <img class="dialog__document" src=url alt=label/>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="dialog__actions">
                    {reviewable
                        .then(|| {
                            [ReviewAction::Approve, ReviewAction::Reject]
                                .into_iter()
                                .map(|action| {
                                    let id = user.id.clone();
                                    let in_flight = in_flight.clone();
                                    let class = match action {
                                        ReviewAction::Approve => "btn btn--approve",
                                        ReviewAction::Reject => "btn btn--reject",
                                    };
                                    let label = match action {
                                        ReviewAction::Approve => "Approve KYC",
                                        ReviewAction::Reject => "Reject KYC",
                                    };
                                    view! {
                                        <button
                                            class=class
                                            disabled=in_flight
                                            on:click=move |_| review.run((id.clone(), action))
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })}
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
