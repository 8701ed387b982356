use serde::{Deserialize, Serialize};

// ============================================================================
// Element lookup rules declared by page classes
// ============================================================================

/// How an element is looked up in the DOM. Mirrors the WebDriver
/// location strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Id,
    Xpath,
    LinkText,
    PartialLinkText,
    Name,
    TagName,
    ClassName,
    CssSelector,
}

/// One element-lookup rule: a strategy plus its selector value.
///
/// Page classes declare locators statically under symbolic names;
/// the map is order-insensitive and keys are unique per class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    pub strategy: Strategy,
    pub value: String,
}

impl Locator {
    pub fn new(strategy: Strategy, value: impl Into<String>) -> Self {
        Locator {
            strategy,
            value: value.into(),
        }
    }
}
