use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::fetch::webdriver::DEFAULT_ENDPOINT;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "page-stubber",
    version,
    about = "Generate Page-Object boilerplate for browser-automation test suites"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The directory where the page modules are
    #[arg(long, global = true, env = "PAGE_STUBBER_PAGE_DIRECTORY")]
    pub page_directory: Option<PathBuf>,

    /// The module the page class is in
    #[arg(long, global = true, env = "PAGE_STUBBER_PAGE_MODULE")]
    pub page_module: Option<String>,

    /// The name of the page class
    #[arg(long, global = true, env = "PAGE_STUBBER_PAGE_CLASS")]
    pub page_class: Option<String>,

    /// The directory with the Jinja templates for building pages
    #[arg(long, global = true, env = "PAGE_STUBBER_TEMPLATE_DIRECTORY")]
    pub template_directory: Option<PathBuf>,

    /// Template file name (default: <page_module>.jinja)
    #[arg(long, global = true, env = "PAGE_STUBBER_TEMPLATE_NAME")]
    pub template_name: Option<String>,

    /// WebDriver endpoint browser sessions are created against
    #[arg(long, global = true, env = "PAGE_STUBBER_WEBDRIVER_ENDPOINT")]
    pub webdriver_endpoint: Option<String>,

    /// Path to config file (default: page-stubber.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stub out a page class for SITE and instantiate it
    StubPages {
        /// URL of the site to stub pages for
        site: String,

        /// Directory generated pages are destined for (default: the page directory)
        #[arg(short, long, env = "PAGE_STUBBER_OUTPUT_DIRECTORY")]
        output_directory: Option<PathBuf>,
    },

    /// Seed the page and template directories with default files
    Initialize {
        /// Read default page modules from this directory instead of the bundled ones
        #[arg(long)]
        default_pages_directory: Option<PathBuf>,

        /// Read default templates from this directory instead of the bundled ones
        #[arg(long)]
        default_templates_directory: Option<PathBuf>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `page-stubber.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub page_directory: Option<PathBuf>,
    pub page_module: Option<String>,
    pub page_class: Option<String>,
    pub template_directory: Option<PathBuf>,
    pub template_name: Option<String>,
    pub webdriver_endpoint: Option<String>,
}

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("page-stubber.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolved configuration (CLI/env > config file > built-in default)
// ============================================================================

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct StubConfig {
    pub page_directory: PathBuf,
    pub page_module: String,
    pub page_class: String,
    pub template_directory: PathBuf,
    pub template_name: String,
    pub webdriver_endpoint: String,
}

impl StubConfig {
    /// Merge CLI/env values with the config file and built-in defaults.
    ///
    /// `template_name` is derived from the resolved `page_module` when
    /// neither the CLI nor the config file names one.
    pub fn resolve(cli: &Cli, config: &AppConfig) -> Self {
        let page_directory = cli
            .page_directory
            .clone()
            .or_else(|| config.page_directory.clone())
            .unwrap_or_else(|| PathBuf::from("pages"));

        let page_module = cli
            .page_module
            .clone()
            .or_else(|| config.page_module.clone())
            .unwrap_or_else(|| "Page".to_string());

        let page_class = cli
            .page_class
            .clone()
            .or_else(|| config.page_class.clone())
            .unwrap_or_else(|| "Page".to_string());

        let template_directory = cli
            .template_directory
            .clone()
            .or_else(|| config.template_directory.clone())
            .unwrap_or_else(|| PathBuf::from("templates"));

        let template_name = cli
            .template_name
            .clone()
            .or_else(|| config.template_name.clone())
            .unwrap_or_else(|| format!("{}.jinja", page_module));

        let webdriver_endpoint = cli
            .webdriver_endpoint
            .clone()
            .or_else(|| config.webdriver_endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        StubConfig {
            page_directory,
            page_module,
            page_class,
            template_directory,
            template_name,
            webdriver_endpoint,
        }
    }
}
