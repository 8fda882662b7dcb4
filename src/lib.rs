//! `record-helpers` is a small library of pure helpers over in-memory collections of plain
//! records: filtering, stable sorting, aggregation, validation, pagination, value-returning
//! updates, shallow merges and safe parsing of untyped external data.
//!
//! Every helper borrows its input and returns a new value. Nothing is mutated in place and no
//! helper keeps state, so any of them can be called from multiple threads without coordination.
//!
//! ## Error model
//!
//! Invalid input is not an error. Helpers answer with a sentinel instead:
//!
//! - aggregations return `0.0` ([`processing::cart_subtotal`], [`processing::average_grade`])
//! - parse boundaries return `None` ([`ingestion::parse_user_summary`])
//! - out-of-range page or attempt numbers are clamped or treated as terminal
//!   ([`processing::paginate`], [`policy::get_retry_decision`])
//! - validation returns every failed rule ([`validation::validate_signup`])
//!
//! The only error ([`HelperError`]) is a contract violation: a role string outside the closed
//! `admin` / `editor` / `viewer` set.
//!
//! ## Quick example
//!
//! ```rust
//! use record_helpers::processing::{cart_subtotal, sort_users, summarize};
//! use record_helpers::types::{CartItem, Transaction, TransactionKind, User};
//!
//! # fn main() -> Result<(), record_helpers::HelperError> {
//! let cart = vec![CartItem::new("Notebook", 5.0, 2), CartItem::new("Pen", 2.0, 3)];
//! assert_eq!(cart_subtotal(&cart), 16.0);
//!
//! let users = vec![User::new("Mia", "viewer")?, User::new("Ana", "admin")?];
//! let sorted = sort_users(&users);
//! assert_eq!(sorted[0].name, "Ana");
//!
//! let summary = summarize(&[
//!     Transaction::new("1", TransactionKind::Income, 1200.0),
//!     Transaction::new("2", TransactionKind::Expense, 300.0),
//! ]);
//! assert_eq!(summary.net, 900.0);
//! # Ok(())
//! # }
//! ```
//!
//! Untyped data goes through a parse boundary before it becomes a typed record:
//!
//! ```rust
//! use record_helpers::ingestion::parse_user_summary;
//! use serde_json::json;
//!
//! assert!(parse_user_summary(&json!({"username": "kai"})).is_none());
//! let user = parse_user_summary(&json!({"username": "kai", "points": 20})).unwrap();
//! assert_eq!(user.points, 20.0);
//! ```
//!
//! ## Modules
//!
//! - [`types`]: record types and closed enumerations
//! - [`processing`]: filter/sort/reduce/update/merge/paginate helpers
//! - [`ingestion`]: parse boundaries for untyped input
//! - [`validation`]: signup validation with accumulated errors
//! - [`policy`]: retry backoff, budget status, counter reducer
//! - [`error`]: error types

pub mod error;
pub mod ingestion;
pub mod policy;
pub mod processing;
pub mod types;
pub mod validation;

pub use error::{HelperError, HelperResult};
