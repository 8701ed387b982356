use clap::Parser;
use page_stubber::cli::commands::{cmd_initialize, cmd_stub_pages};
use page_stubber::cli::config::{Cli, Commands, StubConfig, load_config};
use page_stubber::cli::preflight::{preflight_initialize, preflight_stub};

fn main() {
    let cli = Cli::parse();
    let file_config = load_config(cli.config.as_deref());
    let config = StubConfig::resolve(&cli, &file_config);

    std::process::exit(run(cli, config));
}

fn run(cli: Cli, config: StubConfig) -> i32 {
    match cli.command {
        Commands::StubPages {
            site,
            output_directory,
        } => {
            // Accepted for forward compatibility; resolution does not
            // read it. Defaults to the page directory.
            let output = output_directory.unwrap_or_else(|| config.page_directory.clone());

            if let Err(e) = preflight_stub(&config, &output) {
                eprintln!("{}", e);
                return e.exit_code();
            }

            match cmd_stub_pages(&config, &site, cli.verbose) {
                Ok(page) => {
                    println!("Stubbed class {} for {}", page.class.name, page.url);
                    0
                }
                Err(e) => {
                    eprintln!("{}", e);
                    1
                }
            }
        }
        Commands::Initialize {
            default_pages_directory,
            default_templates_directory,
        } => {
            if let Err(e) = preflight_initialize(
                &config,
                default_pages_directory.as_deref(),
                default_templates_directory.as_deref(),
            ) {
                eprintln!("{}", e);
                return e.exit_code();
            }

            match cmd_initialize(
                &config,
                default_pages_directory.as_deref(),
                default_templates_directory.as_deref(),
                cli.verbose,
            ) {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("{}", e);
                    1
                }
            }
        }
    }
}
