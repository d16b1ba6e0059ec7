//! HTTP middleware components
//!
//! Request correlation and query validation.

pub mod request_id;
pub mod validation;

pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
pub use validation::{ValidatedQuery, ValidationError};
