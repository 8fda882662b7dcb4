//! In-memory record transformations.
//!
//! Every function here is pure: it borrows its input, returns a new value, and keeps no state.
//!
//! Currently implemented:
//!
//! - [`filter`]: [`low_stock()`], [`search_notes()`]
//! - [`sort`]: [`sort_by_number_field()`], [`sort_users()`], [`top_player()`]
//! - [`reduce`]: [`cart_subtotal()`], [`average_grade()`], [`summarize()`]
//! - [`update`]: [`mark_done()`], [`complete_task()`], [`add_task()`], [`add_unique_tag()`]
//! - [`merge`]: [`merge_settings()`], [`merge_json()`]
//! - [`paginate`](mod@paginate): [`paginate()`], [`page_window()`]
//!
//! ## Example: add → complete → paginate
//!
//! ```rust
//! use record_helpers::processing::{add_task, complete_task, paginate};
//!
//! let mut tasks = Vec::new();
//! for title in ["Write types", "Run lesson", "Review"] {
//!     tasks = add_task(&tasks, title);
//! }
//! let tasks = complete_task(&tasks, 1);
//!
//! let first_page = paginate(&tasks, 1, 2);
//! assert_eq!(first_page.len(), 2);
//! assert!(first_page[0].done);
//! assert_eq!(paginate(&tasks, 2, 2)[0].id, 3);
//! ```

pub mod filter;
pub mod merge;
pub mod paginate;
pub mod reduce;
pub mod sort;
pub mod update;

pub use filter::{low_stock, search_notes};
pub use merge::{merge_json, merge_settings};
pub use paginate::{page_window, paginate};
pub use reduce::{average_grade, cart_subtotal, summarize};
pub use sort::{sort_by_number_field, sort_users, top_player};
pub use update::{add_task, add_unique_tag, complete_task, mark_done, next_task_id};
