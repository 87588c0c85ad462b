//! Reinhardt DOM Query - safe element lookup
//!
//! Thin wrappers over selector queries that never fail for a missing element:
//!
//! - [`find_element`]: first match, or `None`
//! - [`find_elements`]: every match in document order, or `None`
//! - [`find_script_by_src`]: the `<script>` whose `src` equals a URL
//!
//! Misses are reported once, at the [`LogLevel`] chosen in [`FindOptions`]
//! (debug by default). Malformed selectors are returned as the host's own
//! error value.
//!
//! The host document is abstracted by [`Dom`]. It is implemented for
//! `web_sys::Document` on WASM (see [`web`]) and for `scraper::Html` with the
//! `html` feature.
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_dom_query::{FindOptions, find_element, find_elements};
//! use scraper::Html;
//!
//! let page = Html::parse_fragment(r#"<div><span class="x">hi</span></div>"#);
//!
//! let span = find_element(&page, ".x", FindOptions::default())?;
//! assert!(span.is_some());
//!
//! // Logged at debug level, returns None
//! let none = find_elements(&page, ".y", FindOptions::default())?;
//! assert!(none.is_none());
//! ```

#![warn(missing_docs)]

pub mod backend;
pub mod error;
pub mod finder;
pub mod host;
mod logging;
pub mod options;
pub mod script;
pub mod selector;

#[cfg(target_arch = "wasm32")]
pub use backend::web;

#[cfg(target_arch = "wasm32")]
pub use error::DomError;
#[cfg(feature = "html")]
pub use error::InvalidSelector;
pub use error::ParseLogLevelError;
pub use finder::{find_element, find_elements};
pub use host::Dom;
pub use options::{FindOptions, LogLevel};
pub use script::find_script_by_src;
pub use selector::{quote_css_string, script_selector};
