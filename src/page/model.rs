use std::collections::BTreeMap;

use crate::fetch::webdriver::DriverHandle;
use crate::page::locator::Locator;

// ============================================================================
// Page classes and the namespaces they are loaded into
// ============================================================================

/// Where a resolved page class came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassOrigin {
    /// Built-in base class, not loaded from disk
    Builtin,
    /// Loaded from a hand-written page-module file
    Module,
    /// Compiled from a rendered template
    Template,
    /// Synthesized at runtime as an empty subclass of the parent
    Synthesized,
}

/// A page class: a name, an optional parent class name, and a static
/// map of symbolic element names to locators.
///
/// This is the value the Resolver produces. It is created fresh on
/// every resolution and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct PageClass {
    pub name: String,
    pub parent: Option<String>,
    pub locators: BTreeMap<String, Locator>,
    pub origin: ClassOrigin,
}

impl PageClass {
    /// A built-in base class with no parent and no locators.
    pub fn base(name: &str) -> Self {
        PageClass {
            name: name.to_string(),
            parent: None,
            locators: BTreeMap::new(),
            origin: ClassOrigin::Builtin,
        }
    }

    /// Synthesize an empty subclass of `parent` named `name`.
    ///
    /// The produced class carries the name, names `parent` as its sole
    /// base, and declares no locators of its own.
    pub fn synthesize(name: &str, parent: &PageClass) -> Self {
        PageClass {
            name: name.to_string(),
            parent: Some(parent.name.clone()),
            locators: BTreeMap::new(),
            origin: ClassOrigin::Synthesized,
        }
    }

    /// Name-based subclass check: a class is a subclass of `parent` if
    /// it is the same class or names it as its base.
    pub fn is_subclass_of(&self, parent: &PageClass) -> bool {
        self.name == parent.name || self.parent.as_deref() == Some(parent.name.as_str())
    }
}

/// An isolated namespace produced by compiling one page-module source
/// text: class name -> class definition. Fresh per load.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModule {
    pub classes: BTreeMap<String, PageClass>,
}

impl PageModule {
    /// Look up a class by name.
    pub fn class(&self, name: &str) -> Option<&PageClass> {
        self.classes.get(name)
    }
}

// ============================================================================
// Per-invocation resolution request
// ============================================================================

/// Identifies the page class one invocation wants: which module file to
/// look for, which class to pull out of it, which template to fall back
/// to, and which parent to synthesize from as a last resort.
#[derive(Debug, Clone)]
pub struct PageClassSpec {
    pub module_name: String,
    pub class_name: String,
    pub template_name: String,
    pub parent: PageClass,
}

// ============================================================================
// Instantiated pages
// ============================================================================

/// A page instance: the resolved class plus the driver handle and URL
/// bound at construction. Owned solely by the caller.
#[derive(Debug, Clone)]
pub struct Page {
    pub class: PageClass,
    pub driver: DriverHandle,
    pub url: String,
}

impl Page {
    pub fn new(class: PageClass, driver: DriverHandle, url: &str) -> Self {
        Page {
            class,
            driver,
            url: url.to_string(),
        }
    }
}
