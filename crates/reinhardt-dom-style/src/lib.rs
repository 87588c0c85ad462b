//! Reinhardt DOM Style - revertible inline style patches
//!
//! [`patch_style`] writes inline style properties on one element and returns a
//! [`RevertHandle`] that puts the previous values back:
//!
//! - values are applied in [`StyleMap`] order, each one captured first
//! - [`StyleValue::Clear`] (or `""`) removes a property instead of emptying it
//! - reverting restores originally absent properties to absent
//! - properties outside the map are never touched
//!
//! Elements are reached through [`StyleTarget`], implemented for
//! `web_sys::HtmlElement` and `web_sys::CssStyleDeclaration` on WASM and for
//! the in-memory [`InlineStyle`] everywhere.
//!
//! Keys are any `AsRef<str>`. [`CssProperty`] is an optional typed
//! vocabulary that catches misspelled names at compile time without changing
//! runtime behavior.
//!
//! ## Example
//!
//! ```
//! use reinhardt_dom_style::{CssProperty, InlineStyle, StyleTarget, StyleValue, patch_style};
//!
//! let style = InlineStyle::parse("display: block");
//!
//! let handle = patch_style(&style, [
//!     (CssProperty::Display, StyleValue::Clear),
//!     (CssProperty::Opacity, StyleValue::from("0.5")),
//! ]);
//! assert_eq!(style.css_text(), "opacity: 0.5;");
//!
//! handle.revert();
//! assert_eq!(style.property_value("display"), "block");
//! assert!(!style.has_property("opacity"));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod inline;
pub mod map;
pub mod patch;
pub mod property;
pub mod target;
pub mod value;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::UnknownProperty;
pub use inline::InlineStyle;
pub use map::StyleMap;
pub use patch::{RevertHandle, patch_style};
pub use property::CssProperty;
pub use target::StyleTarget;
pub use value::StyleValue;

#[cfg(target_arch = "wasm32")]
pub use web::patch_element_style;
