//! Browser utilities: localStorage token persistence, native dialogs,
//! and small pure formatting helpers.

pub mod browser;
pub mod format;
pub mod storage;
