//! Safe element lookup
//!
//! This module provides access to reinhardt-dom-query: selector queries that
//! return `None` instead of failing when nothing matches, with the miss
//! reported at a configurable [`LogLevel`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use reinhardt_dom::query::{FindOptions, LogLevel, web};
//!
//! // Logged at debug level when missing
//! let root = web::select("#app", FindOptions::default())?;
//!
//! // Scoped, silent multi-element lookup
//! let items = web::select_all("li", FindOptions::new().scoped(&list).silent())?;
//! ```

pub use reinhardt_dom_query::*;
