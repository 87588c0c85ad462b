//! Finder configuration
//!
//! [`FindOptions`] carries the optional parameters of the finders with
//! explicit defaults:
//!
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `scope` | `None` | Search the whole document |
//! | `log_level` | [`LogLevel::Debug`] | Report misses at debug severity |

use crate::error::ParseLogLevelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity used to report a selector that matched nothing.
///
/// Deserializes from the lowercase names `"debug"`, `"error"` and
/// `"disabled"`, so it can live in application settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	/// Report at debug severity.
	#[default]
	Debug,
	/// Report at error severity.
	Error,
	/// Never report.
	Disabled,
}

impl LogLevel {
	/// Returns `true` unless the level is [`LogLevel::Disabled`].
	pub fn is_enabled(self) -> bool {
		!matches!(self, Self::Disabled)
	}

	/// Lowercase name of the level.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Debug => "debug",
			Self::Error => "error",
			Self::Disabled => "disabled",
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for LogLevel {
	type Err = ParseLogLevelError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"debug" => Ok(Self::Debug),
			"error" => Ok(Self::Error),
			"disabled" | "off" | "none" => Ok(Self::Disabled),
			_ => Err(ParseLogLevelError(s.to_string())),
		}
	}
}

/// Optional parameters of [`find_element`](crate::find_element) and
/// [`find_elements`](crate::find_elements).
///
/// `N` is the element handle type of the [`Dom`](crate::Dom) being queried.
///
/// # Example
///
/// ```ignore
/// use reinhardt_dom_query::{FindOptions, LogLevel, find_element};
///
/// let button = find_element(&document, "button.submit", FindOptions::new().scoped(&form))?;
/// let banner = find_element(&document, "#banner", FindOptions::new().silent())?;
/// ```
#[derive(Debug)]
pub struct FindOptions<'s, N> {
	/// Element the search is confined to. `None` searches the whole document.
	pub scope: Option<&'s N>,
	/// Severity used when nothing matches.
	pub log_level: LogLevel,
}

impl<'s, N> FindOptions<'s, N> {
	/// Creates options with the default values.
	pub fn new() -> Self {
		Self {
			scope: None,
			log_level: LogLevel::default(),
		}
	}

	/// Confines the search to descendants of `scope`.
	pub fn scoped(mut self, scope: &'s N) -> Self {
		self.scope = Some(scope);
		self
	}

	/// Sets the severity used when nothing matches.
	pub fn log_level(mut self, log_level: LogLevel) -> Self {
		self.log_level = log_level;
		self
	}

	/// Disables not-found reporting.
	pub fn silent(self) -> Self {
		self.log_level(LogLevel::Disabled)
	}

	/// Returns `true` when a scope element was supplied.
	pub fn is_scoped(&self) -> bool {
		self.scope.is_some()
	}
}

impl<N> Default for FindOptions<'_, N> {
	fn default() -> Self {
		Self::new()
	}
}

impl<N> Clone for FindOptions<'_, N> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<N> Copy for FindOptions<'_, N> {}
