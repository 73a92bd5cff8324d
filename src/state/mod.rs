//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `kyc`, `stats`, `ui`) so individual
//! pages can depend on small focused models. Decision logic lives in plain
//! functions on these types; the Leptos layer only wires signals to them.

pub mod kyc;
pub mod session;
pub mod stats;
pub mod ui;
