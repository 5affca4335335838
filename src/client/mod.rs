//! HTTP access to the coderlm server.
//!
//! - [`ApiClient`] issues one request and translates the response status
//! - [`QueryParams`] collects query parameters, skipping unset optional ones

mod http;
mod query;

pub use http::{ApiClient, SESSION_HEADER};
pub use query::QueryParams;
