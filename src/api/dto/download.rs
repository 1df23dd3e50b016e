//! DTOs for the book download endpoint.

use serde::Deserialize;

/// Query parameters for a download.
#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    /// Receipt code returned by checkout.
    #[serde(default)]
    pub receipt: Option<String>,
}
