//! Content type detection for book downloads.

/// Returns the MIME type for a book file based on its extension.
///
/// Unknown extensions fall back to `application/octet-stream`.
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("epub") => "application/epub+zip",
        Some("mobi") => "application/x-mobipocket-ebook",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Builds a `Content-Disposition` value that makes browsers save the file.
///
/// Quotes and backslashes are dropped from the suggested name.
pub fn attachment_disposition(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .filter(|c| !matches!(c, '"' | '\\') && !c.is_control())
        .collect();

    format!("attachment; filename=\"{safe}\"")
}
