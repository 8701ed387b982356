use std::path::Path;

use crate::cli::config::StubConfig;
use crate::error::StubError;
use crate::fetch;
use crate::fetch::webdriver::WebDriverClient;
use crate::init::defaults::{bundled_pages, bundled_templates};
use crate::init::initializer::{CopyOutcome, seed_artifacts, seed_dir};
use crate::page::model::Page;
use crate::stub_site;

// ============================================================================
// stub-pages subcommand
// ============================================================================

/// Main workflow: verify the site, start a driver session pointed at
/// it, resolve the page class, and instantiate it.
pub fn cmd_stub_pages(
    config: &StubConfig,
    site: &str,
    verbose: u8,
) -> Result<Page, StubError> {
    if verbose > 0 {
        eprintln!(
            "Fetching {} via WebDriver at {}...",
            site, config.webdriver_endpoint
        );
    }

    let driver = fetch::get_driver(site, &config.webdriver_endpoint)?;
    let handle = driver.clone();
    let result = stub_site(config, site, driver);

    // The stub workflow only needs the session to exist; end it whether
    // or not the page could be built.
    WebDriverClient::new(&handle.endpoint).quit(&handle);

    result
}

// ============================================================================
// initialize subcommand
// ============================================================================

/// Seed the page and template directories, from the bundled defaults
/// or from explicitly given default directories.
pub fn cmd_initialize(
    config: &StubConfig,
    default_pages: Option<&Path>,
    default_templates: Option<&Path>,
    verbose: u8,
) -> Result<(), StubError> {
    let mut outcomes = match default_pages {
        Some(dir) => seed_dir(dir, &config.page_directory)?,
        None => seed_artifacts(&bundled_pages(), &config.page_directory)?,
    };
    outcomes.extend(match default_templates {
        Some(dir) => seed_dir(dir, &config.template_directory)?,
        None => seed_artifacts(&bundled_templates(), &config.template_directory)?,
    });

    for (path, outcome) in &outcomes {
        match outcome {
            CopyOutcome::Written => {
                if verbose > 0 {
                    eprintln!("  Wrote: {}", path.display());
                }
            }
            CopyOutcome::Unchanged => {
                if verbose > 0 {
                    eprintln!("  Up to date: {}", path.display());
                }
            }
            CopyOutcome::Diverged(sibling) => {
                println!(
                    "Default for {} changed; new content in {}",
                    path.display(),
                    sibling.display()
                );
            }
        }
    }

    println!(
        "Initialized {} and {}",
        config.page_directory.display(),
        config.template_directory.display()
    );
    Ok(())
}
