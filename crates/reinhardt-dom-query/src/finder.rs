//! Element finders
//!
//! [`find_element`] and [`find_elements`] wrap a selector query with optional
//! scoping and not-found reporting. A miss is never an error: it yields `None`
//! and, unless the log level is [`LogLevel::Disabled`](crate::LogLevel), one
//! diagnostic. Host failures (malformed selectors) are returned as-is.

use crate::host::Dom;
use crate::logging::report_not_found;
use crate::options::FindOptions;

/// Returns the first element matching `selector`, or `None`.
///
/// # Example
///
/// ```ignore
/// use reinhardt_dom_query::{FindOptions, find_element};
///
/// match find_element(&document, "#app", FindOptions::default())? {
///     Some(root) => mount(&root),
///     None => {} // already reported at debug level
/// }
/// ```
pub fn find_element<'a, D>(
	dom: &'a D,
	selector: &str,
	options: FindOptions<'_, D::Node<'a>>,
) -> Result<Option<D::Node<'a>>, D::Error>
where
	D: Dom + ?Sized,
{
	let found = dom.query_selector(options.scope, selector)?;
	if found.is_none() {
		report_not_found(options.log_level, selector, options.is_scoped());
	}
	Ok(found)
}

/// Returns every element matching `selector` in document order.
///
/// The result is never an empty vector: no match yields `None` so callers can
/// test for the sentinel directly.
pub fn find_elements<'a, D>(
	dom: &'a D,
	selector: &str,
	options: FindOptions<'_, D::Node<'a>>,
) -> Result<Option<Vec<D::Node<'a>>>, D::Error>
where
	D: Dom + ?Sized,
{
	let found = dom.query_selector_all(options.scope, selector)?;
	if found.is_empty() {
		report_not_found(options.log_level, selector, options.is_scoped());
		return Ok(None);
	}
	Ok(Some(found))
}
