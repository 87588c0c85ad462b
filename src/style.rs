//! Revertible inline style patches
//!
//! This module provides access to reinhardt-dom-style: [`patch_style`] writes
//! inline properties on an element and returns a [`RevertHandle`] restoring
//! what was there before.
//!
//! ## Example
//!
//! ```rust,ignore
//! use reinhardt_dom::style::{StyleValue, patch_element_style};
//!
//! let unlock = patch_element_style(&body, [
//!     ("overflow", StyleValue::from("hidden")),
//!     ("padding-right", StyleValue::from("15px")),
//! ]);
//! // ... later
//! unlock.revert();
//! ```

pub use reinhardt_dom_style::*;
