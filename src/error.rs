use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum StubError {
    /// GET on the target site returned a non-success status
    HttpStatus { status: u16, url: String },

    /// GET on the target site failed before a status was received
    Request { url: String, source: reqwest::Error },

    /// WebDriver endpoint request failed or returned garbage
    Driver { context: String, source: Option<reqwest::Error> },

    /// A page-module file exists but could not be read
    ModuleRead { path: PathBuf, source: std::io::Error },

    /// A page-module source text failed to compile
    ModuleCompile { origin: String, source: serde_yaml::Error },

    /// A template exists but failed to render
    TemplateRender { name: String, source: minijinja::Error },

    /// The compiled namespace has no class with the requested name
    ClassMissing { class: String, origin: String },

    /// The copy target's extension already equals the collision suffix
    SuffixCollision { path: PathBuf, suffix: String },

    /// Filesystem operation failed during initialization
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for StubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StubError::HttpStatus { status, url } => {
                write!(f, "{} status when GETting {}", status, url)
            }
            StubError::Request { url, source } => {
                write!(f, "Request to {} failed: {}", url, source)
            }
            StubError::Driver { context, source } => match source {
                Some(e) => write!(f, "WebDriver {} failed: {}", context, e),
                None => write!(f, "WebDriver {} failed", context),
            },
            StubError::ModuleRead { path, source } => {
                write!(f, "Failed to read page module {}: {}", path.display(), source)
            }
            StubError::ModuleCompile { origin, source } => {
                write!(f, "Failed to compile page module from {}: {}", origin, source)
            }
            StubError::TemplateRender { name, source } => {
                write!(f, "Failed to render template {}: {}", name, source)
            }
            StubError::ClassMissing { class, origin } => {
                write!(f, "No class named '{}' in {}", class, origin)
            }
            StubError::SuffixCollision { path, suffix } => {
                write!(
                    f,
                    "Target {} already has the extension '{}'",
                    path.display(),
                    suffix
                )
            }
            StubError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for StubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StubError::Request { source, .. } => Some(source),
            StubError::Driver { source, .. } => source
                .as_ref()
                .map(|e| e as &(dyn std::error::Error + 'static)),
            StubError::ModuleRead { source, .. } => Some(source),
            StubError::ModuleCompile { source, .. } => Some(source),
            StubError::TemplateRender { source, .. } => Some(source),
            StubError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
