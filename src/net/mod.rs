//! Network layer: wire types for the backend REST API and the gateway
//! client that issues the actual requests.

pub mod api;
pub mod types;
