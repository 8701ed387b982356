pub mod http;
pub mod webdriver;

use crate::error::StubError;
use crate::fetch::webdriver::{DriverHandle, WebDriverClient};

/// Get a driver session pointed at the site, or fail.
///
/// Checks the site answers a plain GET first so an unreachable or
/// erroring site is reported before a browser is spun up.
pub fn get_driver(site: &str, endpoint: &str) -> Result<DriverHandle, StubError> {
    http::check_site(site)?;
    let client = WebDriverClient::new(endpoint);
    let driver = client.new_session()?;
    client.navigate(&driver, site)?;
    Ok(driver)
}
