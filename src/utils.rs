//! Utility functions for text manipulation.

/// Extracts a substring addressed in UTF-16 code units.
///
/// Telegram reports entity offsets and lengths in UTF-16 code units, which
/// differ from byte offsets as soon as the text holds non-ASCII characters.
///
/// # Arguments
///
/// * `text` - The full message text
/// * `offset` - Start of the substring, in UTF-16 code units
/// * `length` - Length of the substring, in UTF-16 code units
///
/// # Returns
///
/// `None` if the range lies outside the text.
///
/// # Examples
///
/// ```no_run
/// assert_eq!(utf16_substring("/stats #2PP", 7, 4), Some("#2PP".to_owned()));
/// ```
pub fn utf16_substring(text: &str, offset: usize, length: usize) -> Option<String> {
    let units: Vec<u16> = text.encode_utf16().collect();
    let end = offset.checked_add(length)?;
    units.get(offset..end).map(String::from_utf16_lossy)
}
