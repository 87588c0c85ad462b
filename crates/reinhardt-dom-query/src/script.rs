//! Active script lookup
//!
//! Locates the `<script>` element that loaded the running module by matching
//! its `src` attribute against the module's own URL. In the browser the URL is
//! `import.meta.url` of the generated JS glue; see
//! [`web::current_script`](crate::web::current_script).
//!
//! Lookups here never report misses: a page that loads the module through a
//! bundler has no matching `<script src>` and that is not a fault.

use crate::finder::find_element;
use crate::host::Dom;
use crate::options::FindOptions;
use crate::selector::script_selector;

/// Returns the `<script>` element whose `src` equals `locator` exactly.
///
/// Searches the whole document with not-found reporting disabled.
pub fn find_script_by_src<'a, D>(dom: &'a D, locator: &str) -> Result<Option<D::Node<'a>>, D::Error>
where
	D: Dom + ?Sized,
{
	find_element(dom, &script_selector(locator), FindOptions::new().silent())
}
