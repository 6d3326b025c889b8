//! MongoDB-style document query matching.
//!
//! `mangomatch` is a pure predicate engine: given a query expression and a
//! single document, [`matches`] returns whether the document satisfies the
//! query. There are no collections, no indexes, and no mutation; one call,
//! one verdict.
//!
//! Queries and documents share one dynamically-typed [`Value`] tree, and a
//! [`serde_json`] shim ([`matches_json`], [`from_json`], [`to_json`])
//! accepts the ecosystem representation directly.
//!
//! ```
//! use mangomatch::matches_json;
//! use serde_json::json;
//!
//! let doc = json!({
//!     "name": "John Doe",
//!     "age": 35,
//!     "tags": ["premium", "verified"],
//! });
//!
//! assert!(matches_json(&json!({"age": {"$gt": 30}}), &doc));
//! assert!(matches_json(&json!({"tags": "premium"}), &doc));
//! assert!(!matches_json(&json!({"missing": {"$exists": true}}), &doc));
//! ```
//!
//! # Totality
//!
//! Matching never fails: unknown operators, malformed operands, invalid
//! regexes, and type mismatches all falsify the enclosing predicate
//! instead of raising. Queries from untrusted sources are safe to run
//! as-is; [`check`] is available to lint them for shape problems first.
//!
//! # Regex dialect
//!
//! `$regex` patterns use the [`regex`] crate's dialect (a Perl-compatible
//! subset without backreferences or look-around), which is part of this
//! crate's public contract.

pub mod compare;
pub mod convert;
pub mod matcher;
mod operators;
pub mod path;
pub mod value;

pub use convert::{from_json, matches_json, to_json};
pub use matcher::{check, matches, QueryError};
pub use path::resolve;
pub use value::{TypeTag, Value};
