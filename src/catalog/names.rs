//! Display-name and URL derivation for literature files.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// URL prefix under which literature files are served.
pub const LITERATURE_URL_PREFIX: &str = "/literature/";

/// Characters escaped in a single URL path segment.
///
/// Everything except the unreserved set (`-._~`) and `$&+:=@` is escaped, so
/// `/`, `;`, `,`, `?`, `%` and spaces in a file name can never change the
/// meaning of the URL.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Derive a human-friendly title from a file name.
///
/// 1. The extension (from the last `.` onward) is stripped.
/// 2. Underscores and hyphens become spaces.
/// 3. A single leading digit followed by a space is dropped, provided the
///    name is longer than two bytes.
///
/// Only a one-digit ordinal is recognised: `"12 Chapter"` is returned
/// unchanged. This is a known limitation and is kept as is.
///
/// # Examples
///
/// ```
/// use literature_server::catalog::names::clean_file_name;
///
/// assert_eq!(clean_file_name("1_Intro_to_Systems.pdf"), "Intro to Systems");
/// assert_eq!(clean_file_name("Chapter-5-Notes.txt"), "Chapter 5 Notes");
/// assert_eq!(clean_file_name("notes.md"), "notes");
/// ```
#[must_use]
pub fn clean_file_name(file_name: &str) -> String {
    let stem = file_name
        .rfind('.')
        .map_or(file_name, |dot| &file_name[..dot]);
    let name = stem.replace('_', " ").replace('-', " ");

    let bytes = name.as_bytes();
    if bytes.len() > 2 && bytes[1] == b' ' && bytes[0].is_ascii_digit() {
        // Both leading bytes are ASCII, so index 2 is a char boundary.
        return name[2..].to_string();
    }
    name
}

/// Build the retrieval URL for a literature file.
#[must_use]
pub fn literature_url(file_name: &str) -> String {
    format!(
        "{LITERATURE_URL_PREFIX}{}",
        utf8_percent_encode(file_name, PATH_SEGMENT)
    )
}
