use std::path::{Path, PathBuf};

use clap::Parser;
use page_stubber::cli::config::{AppConfig, Cli, Commands, StubConfig, load_config};
use page_stubber::cli::preflight::{preflight_initialize, preflight_stub};

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_stub_pages_minimal() {
    let cli = Cli::parse_from(["page-stubber", "stub-pages", "https://example.com"]);
    match cli.command {
        Commands::StubPages {
            site,
            output_directory,
        } => {
            assert_eq!(site, "https://example.com");
            assert!(output_directory.is_none());
        }
        _ => panic!("Expected StubPages command"),
    }
    assert!(cli.page_directory.is_none());
    assert!(cli.template_name.is_none());
}

#[test]
fn cli_parse_stub_pages_all_args() {
    let cli = Cli::parse_from([
        "page-stubber",
        "--page-directory",
        "my-pages",
        "--page-module",
        "Login",
        "--page-class",
        "LoginPage",
        "--template-directory",
        "my-templates",
        "--template-name",
        "Login.jinja",
        "stub-pages",
        "https://test.com",
        "-o",
        "generated",
    ]);
    match cli.command {
        Commands::StubPages {
            site,
            output_directory,
        } => {
            assert_eq!(site, "https://test.com");
            assert_eq!(output_directory, Some(PathBuf::from("generated")));
        }
        _ => panic!("Expected StubPages command"),
    }
    assert_eq!(cli.page_directory, Some(PathBuf::from("my-pages")));
    assert_eq!(cli.page_module.as_deref(), Some("Login"));
    assert_eq!(cli.page_class.as_deref(), Some("LoginPage"));
    assert_eq!(cli.template_directory, Some(PathBuf::from("my-templates")));
    assert_eq!(cli.template_name.as_deref(), Some("Login.jinja"));
}

#[test]
fn cli_parse_initialize() {
    let cli = Cli::parse_from([
        "page-stubber",
        "initialize",
        "--default-pages-directory",
        "shipped/pages",
    ]);
    match cli.command {
        Commands::Initialize {
            default_pages_directory,
            default_templates_directory,
        } => {
            assert_eq!(default_pages_directory, Some(PathBuf::from("shipped/pages")));
            assert!(default_templates_directory.is_none());
        }
        _ => panic!("Expected Initialize command"),
    }
}

#[test]
fn cli_globals_accepted_after_subcommand() {
    let cli = Cli::parse_from([
        "page-stubber",
        "stub-pages",
        "https://example.com",
        "--page-module",
        "Checkout",
        "-v",
    ]);
    assert_eq!(cli.page_module.as_deref(), Some("Checkout"));
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_env_overrides_are_honored() {
    // Only this test touches PAGE_STUBBER_WEBDRIVER_ENDPOINT
    unsafe { std::env::set_var("PAGE_STUBBER_WEBDRIVER_ENDPOINT", "http://localhost:4444") };
    let cli = Cli::parse_from(["page-stubber", "stub-pages", "https://example.com"]);
    unsafe { std::env::remove_var("PAGE_STUBBER_WEBDRIVER_ENDPOINT") };

    assert_eq!(
        cli.webdriver_endpoint.as_deref(),
        Some("http://localhost:4444")
    );
}

// ============================================================================
// Configuration resolution
// ============================================================================

fn parse(args: &[&str]) -> Cli {
    Cli::parse_from(args)
}

#[test]
fn resolve_applies_built_in_defaults() {
    let cli = parse(&["page-stubber", "stub-pages", "https://example.com"]);
    let config = StubConfig::resolve(&cli, &AppConfig::default());

    assert_eq!(config.page_directory, PathBuf::from("pages"));
    assert_eq!(config.page_module, "Page");
    assert_eq!(config.page_class, "Page");
    assert_eq!(config.template_directory, PathBuf::from("templates"));
    assert_eq!(config.template_name, "Page.jinja");
}

#[test]
fn template_name_is_derived_from_page_module() {
    let cli = parse(&[
        "page-stubber",
        "--page-module",
        "Login",
        "stub-pages",
        "https://example.com",
    ]);
    let config = StubConfig::resolve(&cli, &AppConfig::default());

    assert_eq!(config.template_name, "Login.jinja");
}

#[test]
fn explicit_template_name_wins_over_derivation() {
    let cli = parse(&[
        "page-stubber",
        "--page-module",
        "Login",
        "--template-name",
        "Custom.jinja",
        "stub-pages",
        "https://example.com",
    ]);
    let config = StubConfig::resolve(&cli, &AppConfig::default());

    assert_eq!(config.template_name, "Custom.jinja");
}

#[test]
fn config_file_fills_gaps_but_cli_wins() {
    let file = AppConfig {
        page_module: Some("FromFile".to_string()),
        page_class: Some("FileClass".to_string()),
        ..AppConfig::default()
    };

    let cli = parse(&[
        "page-stubber",
        "--page-class",
        "CliClass",
        "stub-pages",
        "https://example.com",
    ]);
    let config = StubConfig::resolve(&cli, &file);

    assert_eq!(config.page_module, "FromFile");
    assert_eq!(config.page_class, "CliClass");
    // Derivation uses the resolved module, wherever it came from
    assert_eq!(config.template_name, "FromFile.jinja");
}

#[test]
fn load_config_reads_yaml_and_tolerates_absence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page-stubber.yaml");
    std::fs::write(&path, "page_module: Configured\n").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.page_module.as_deref(), Some("Configured"));

    let missing = load_config(Some("/nonexistent/page-stubber.yaml"));
    assert!(missing.page_module.is_none());
}

// ============================================================================
// Preflight checks
// ============================================================================

fn stub_config(pages: &Path, templates: &Path) -> StubConfig {
    StubConfig {
        page_directory: pages.to_path_buf(),
        page_module: "Page".to_string(),
        page_class: "Page".to_string(),
        template_directory: templates.to_path_buf(),
        template_name: "Page.jinja".to_string(),
        webdriver_endpoint: "http://localhost:9515".to_string(),
    }
}

#[test]
fn preflight_passes_on_usable_directories() {
    let pages = tempfile::tempdir().unwrap();
    let templates = tempfile::tempdir().unwrap();
    let config = stub_config(pages.path(), templates.path());

    assert!(preflight_stub(&config, pages.path()).is_ok());
    assert!(preflight_initialize(&config, None, None).is_ok());
}

#[test]
fn preflight_rejects_missing_page_directory() {
    let templates = tempfile::tempdir().unwrap();
    let missing = templates.path().join("no-such-dir");
    let config = stub_config(&missing, templates.path());

    let err = preflight_stub(&config, templates.path()).unwrap_err();

    assert_eq!(err.exit_code(), 2);
    let message = err.to_string();
    assert!(message.contains("--page-directory"));
    assert!(message.contains("no-such-dir"));
    assert!(message.contains("does not exist"));
}

#[test]
fn preflight_rejects_file_where_directory_expected() {
    let pages = tempfile::tempdir().unwrap();
    let templates = tempfile::tempdir().unwrap();
    let file = templates.path().join("actually-a-file");
    std::fs::write(&file, "x").unwrap();
    let config = stub_config(pages.path(), &file);

    let err = preflight_stub(&config, pages.path()).unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("--template-directory"));
    assert!(err.to_string().contains("is not a directory"));
}

#[test]
fn preflight_rejects_missing_output_directory() {
    let pages = tempfile::tempdir().unwrap();
    let templates = tempfile::tempdir().unwrap();
    let config = stub_config(pages.path(), templates.path());
    let missing = pages.path().join("no-output");

    let err = preflight_stub(&config, &missing).unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("--output-directory"));
}

#[cfg(unix)]
#[test]
fn preflight_rejects_unwritable_output_directory() {
    use std::os::unix::fs::PermissionsExt;

    let pages = tempfile::tempdir().unwrap();
    let templates = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    std::fs::set_permissions(output.path(), std::fs::Permissions::from_mode(0o555)).unwrap();

    let config = stub_config(pages.path(), templates.path());
    let err = preflight_stub(&config, output.path()).unwrap_err();

    std::fs::set_permissions(output.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("is not writable"));
}

#[cfg(unix)]
#[test]
fn preflight_rejects_untraversable_page_directory() {
    use std::os::unix::fs::PermissionsExt;

    let pages = tempfile::tempdir().unwrap();
    let templates = tempfile::tempdir().unwrap();
    std::fs::set_permissions(pages.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

    let config = stub_config(pages.path(), templates.path());
    let err = preflight_stub(&config, templates.path()).unwrap_err();

    std::fs::set_permissions(pages.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("is not executable"));
}

#[test]
fn preflight_initialize_checks_explicit_default_directories() {
    let pages = tempfile::tempdir().unwrap();
    let templates = tempfile::tempdir().unwrap();
    let config = stub_config(pages.path(), templates.path());
    let missing = pages.path().join("no-defaults");

    let err = preflight_initialize(&config, Some(&missing), None).unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("--default-pages-directory"));
}

#[test]
fn preflight_initialize_allows_missing_targets() {
    let base = tempfile::tempdir().unwrap();
    let pages = base.path().join("pages");
    let templates = base.path().join("templates");
    let config = stub_config(&pages, &templates);

    // Targets are created by initialize itself
    assert!(preflight_initialize(&config, None, None).is_ok());
}
