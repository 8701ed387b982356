use crate::cli::config::StubConfig;
use crate::error::StubError;
use crate::fetch::webdriver::DriverHandle;
use crate::page::model::{Page, PageClass, PageClassSpec};
use crate::resolver::resolve::resolve;

pub mod cli;
pub mod error;
pub mod fetch;
pub mod init;
pub mod page;
pub mod resolver;

/// Name of the built-in parent class used for tier-3 synthesis.
pub const BASE_CLASS_NAME: &str = "Page";

/// Resolve the configured page class and bind it to a live driver
/// session and URL.
///
/// The driver handle is acquired by the caller (see [`fetch::get_driver`])
/// so resolution stays independent of how the browser was obtained.
pub fn stub_site(
    config: &StubConfig,
    site: &str,
    driver: DriverHandle,
) -> Result<Page, StubError> {
    let spec = PageClassSpec {
        module_name: config.page_module.clone(),
        class_name: config.page_class.clone(),
        template_name: config.template_name.clone(),
        parent: PageClass::base(BASE_CLASS_NAME),
    };

    let class = resolve(&config.page_directory, &config.template_directory, &spec)?;
    Ok(Page::new(class, driver, site))
}
