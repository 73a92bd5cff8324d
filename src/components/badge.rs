use leptos::prelude::*;

use crate::net::types::KycStatus;

/// Colored pill showing a record's KYC status.
#[component]
pub fn StatusBadge(status: KycStatus) -> impl IntoView {
    let class = match status {
        KycStatus::Pending => "badge badge--pending",
        KycStatus::Completed => "badge badge--completed",
        KycStatus::Rejected => "badge badge--rejected",
    };

    view! { <span class=class>{status.as_str()}</span> }
}
