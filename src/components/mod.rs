//! Shared UI components: the session guard wrapping every protected route,
//! the top navigation bar, and small display helpers.

pub mod badge;
pub mod guard;
pub mod navbar;
