//! Parse boundaries for untyped external input.
//!
//! - [`json`]: [`parse_user_summary`] / [`parse_user_summary_str`]
//! - [`route`]: [`parse_route`]
//!
//! These functions never fail loudly: input of the wrong shape yields `None` (or an empty
//! field), and the reason is logged at `debug` level through `tracing`.

pub mod json;
pub mod route;

pub use json::{parse_user_summary, parse_user_summary_str};
pub use route::{parse_route, ParsedRoute};
