//! RFC 9457 Problem Details for HTTP APIs
//!
//! Pure data types for the `application/problem+json` error format, with no
//! dependencies on HTTP frameworks. It includes:
//! - An immutable [`Problem`] value and its mutable [`ProblemBuilder`]
//! - A canonical JSON serializer with fixed field order
//!
//! ```
//! use http::StatusCode;
//! use problem_details::Problem;
//!
//! let mut builder = Problem::builder();
//! builder
//!     .type_url("out-of-credit.html", "https://example.com/probs")
//!     .status(StatusCode::FORBIDDEN)
//!     .title("You do not have enough credit.")
//!     .detail("Your current balance is 30, but that costs 50.")
//!     .instance("/account/12345/msgs/abc");
//! builder.extension("balance", 30)?;
//!
//! assert_eq!(
//!     builder.build().to_json()?,
//!     concat!(
//!         r#"{"type":"https://example.com/probs/out-of-credit.html","#,
//!         r#""status":403,"title":"You do not have enough credit.","#,
//!         r#""detail":"Your current balance is 30, but that costs 50.","#,
//!         r#""instance":"/account/12345/msgs/abc","balance":30}"#
//!     )
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod problem;
mod serializer;

// Re-export commonly used types
pub use error::ExtensionError;
pub use problem::{ABOUT_BLANK, APPLICATION_PROBLEM_JSON, Problem, ProblemBuilder};
