//! # Reinhardt DOM
//!
//! Small DOM convenience helpers for Reinhardt frontends.
//!
//! - [`find_element`] / [`find_elements`]: selector lookup that returns `None`
//!   instead of failing, optionally scoped to an element, reporting misses at a
//!   configurable [`LogLevel`]
//! - [`find_script_by_src`] (and `query::web::current_script` on WASM): the
//!   `<script>` element that loaded the running module
//! - [`patch_style`]: inline style writes returning a [`RevertHandle`]
//!
//! Each helper is a single synchronous call with no shared state. The host
//! document and element styles are reached through the [`Dom`] and
//! [`StyleTarget`] traits, implemented for `web-sys` types on WASM, for
//! `scraper::Html` with the `html` feature and for [`InlineStyle`].
//!
//! ## Feature Flags
//!
//! - `html` (default) - query parsed HTML documents via `scraper`
//! - `web-sys-full` - all `web-sys` features the browser backends use
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use reinhardt_dom::prelude::*;
//!
//! let dialog = query::web::select("#dialog", FindOptions::new().log_level(LogLevel::Error))?;
//! if let Some(dialog) = dialog {
//!     let body = query::web::document()?.body().expect("body");
//!     let restore = style::patch_element_style(&body, [("overflow", "hidden")]);
//!     // ... on close
//!     restore.revert();
//! }
//! ```

#![warn(missing_docs)]

pub mod query;
pub mod style;

pub use query::{Dom, FindOptions, LogLevel, find_element, find_elements, find_script_by_src};
pub use style::{
	CssProperty, InlineStyle, RevertHandle, StyleMap, StyleTarget, StyleValue, patch_style,
};

/// Commonly used types and functions.
pub mod prelude {
	pub use crate::query::{
		Dom, FindOptions, LogLevel, find_element, find_elements, find_script_by_src,
	};
	pub use crate::style::{
		CssProperty, InlineStyle, RevertHandle, StyleMap, StyleTarget, StyleValue, patch_style,
	};
	pub use crate::{query, style};
}
