//! Error types for style handling.
//!
//! Patching and reverting never fail; the only error is parsing a name that
//! is not in the typed vocabulary.

use thiserror::Error;

/// A property name outside the [`CssProperty`](crate::CssProperty) vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown CSS property: {0}")]
pub struct UnknownProperty(pub String);
