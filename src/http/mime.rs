//! MIME type detection module
//!
//! Content-Type for the embedded asset types.

/// Get MIME Content-Type based on file extension
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Extension of the last path segment, if any
pub fn extension_of(path: &str) -> Option<&str> {
    let file = path.rsplit('/').next()?;
    let (stem, ext) = file.rsplit_once('.')?;
    if stem.is_empty() {
        None
    } else {
        Some(ext)
    }
}
