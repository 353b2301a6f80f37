//! # Argentina Time Server Core
//!
//! Timezone-aware formatting of the current instant.
//!
//! ## Features
//! - ISO 8601, Argentine Spanish long form, epoch milliseconds and numeric output
//! - Any IANA timezone, `UTC` included
//! - Errors reported inside the result instead of failing the call
//!
//! ## Modules
//! - `error`: Custom error types and error handling
//! - `formatter`: Rendering of an instant in a timezone and format
//! - `models`: Requests, results and format selectors
//! - `provider`: Default handling and user facing messages
//! - `utils`: Format patterns and location labels

pub mod error;
pub mod formatter;
pub mod models;
pub mod provider;
pub mod utils;
