//! File types advertised by the upload control.
//!
//! The list is shown to the user and passed to `<input accept>`; it is never
//! enforced. The answering service decides what it can read.

pub const ADVERTISED_EXTENSIONS: &[&str] = &[
    "pdf", "txt", "docx", "xls", "xlsx", "png", "jpg", "jpeg",
];

/// Value for the `accept` attribute, e.g. `".pdf,.txt,.docx"`.
pub fn accept_attribute() -> String {
    ADVERTISED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn supported_formats_hint() -> &'static str {
    "Supported formats: PDF, TXT, Word (DOCX), Excel (XLS/XLSX), Images (PNG/JPG)"
}

/// Lowercased extension of a file name, without the dot.
pub fn extension_of(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

pub fn is_advertised(file_name: &str) -> bool {
    extension_of(file_name)
        .map(|ext| ADVERTISED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}
