//! Content-type detection for uploaded artifacts
//!
//! Minimal platform MIME tables routinely miss the web-asset extensions CI
//! builds produce, so a fixed override table is authoritative for those
//! suffixes; everything else goes through `mime_guess`.

/// Content type used when no mapping matches
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Overrides for extensions the platform tables handle inconsistently.
/// Matched case-sensitively against the end of the file name.
const CONTENT_TYPE_OVERRIDES: &[(&str, &str)] = &[
    (".js", "application/js"),
    (".json", "application/json"),
    (".svg", "image/svg+xml"),
    (".woff", "application/x-font-woff"),
    (".woff2", "application/x-font-woff"),
    (".ttf", "application/x-font-ttf"),
];

/// Resolve the MIME type for a file name
pub fn content_type(file_name: &str) -> String {
    for (suffix, mime) in CONTENT_TYPE_OVERRIDES {
        if file_name.ends_with(suffix) {
            return (*mime).to_string();
        }
    }

    mime_guess::from_path(file_name)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string())
}
