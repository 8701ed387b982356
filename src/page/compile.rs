use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::StubError;
use crate::page::locator::Locator;
use crate::page::model::{ClassOrigin, PageClass, PageModule};

// ============================================================================
// Page-module compilation
// ============================================================================

/// On-disk shape of one class definition. The class name is the
/// mapping key in the module document, not a field of the body.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassDef {
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    locators: BTreeMap<String, Locator>,
}

/// Compile a page-module source text into a fresh, isolated namespace.
///
/// The source is a YAML mapping of class name -> class definition:
///
/// ```yaml
/// LoginPage:
///   parent: Page
///   locators:
///     username: { strategy: id, value: user-name }
///     submit: { strategy: css_selector, value: "button[type=submit]" }
/// ```
///
/// Every call produces a new `PageModule`; nothing is cached across
/// loads. Parse errors carry `origin` (a path or template name) for
/// the user and the underlying YAML error as `source()`, unchanged.
pub fn compile_module(
    source: &str,
    origin: &str,
    class_origin: ClassOrigin,
) -> Result<PageModule, StubError> {
    let defs: BTreeMap<String, ClassDef> =
        serde_yaml::from_str(source).map_err(|e| StubError::ModuleCompile {
            origin: origin.to_string(),
            source: e,
        })?;

    let classes = defs
        .into_iter()
        .map(|(name, def)| {
            let class = PageClass {
                name: name.clone(),
                parent: def.parent,
                locators: def.locators,
                origin: class_origin,
            };
            (name, class)
        })
        .collect();

    Ok(PageModule { classes })
}
