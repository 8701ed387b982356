use crate::init::initializer::FileArtifact;

// ============================================================================
// Bundled defaults (read-only, resolved at startup)
// ============================================================================

/// The base page module shipped with the tool.
pub const BASE_PAGE_MODULE: &str = include_str!("../../defaults/pages/Page.yaml");

/// The default page-class template shipped with the tool.
pub const BASE_PAGE_TEMPLATE: &str = include_str!("../../defaults/templates/Page.jinja");

/// Default artifacts for the pages directory.
pub fn bundled_pages() -> Vec<FileArtifact> {
    vec![FileArtifact::new("Page.yaml", BASE_PAGE_MODULE)]
}

/// Default artifacts for the templates directory.
pub fn bundled_templates() -> Vec<FileArtifact> {
    vec![FileArtifact::new("Page.jinja", BASE_PAGE_TEMPLATE)]
}
