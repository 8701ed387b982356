use crate::error::StubError;

// ============================================================================
// Page-existence check
// ============================================================================

/// GET the site and verify it answers with a success status.
///
/// Non-2xx logs the status and URL, then returns the typed error; the
/// caller is expected to abort, not retry. No timeout beyond the
/// blocking client's defaults.
pub fn check_site(url: &str) -> Result<(), StubError> {
    let resp = reqwest::blocking::get(url).map_err(|e| StubError::Request {
        url: url.to_string(),
        source: e,
    })?;

    let status = resp.status();
    if !status.is_success() {
        eprintln!("{} status when GETting {}", status.as_u16(), url);
        return Err(StubError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(())
}
