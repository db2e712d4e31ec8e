//! Comment and note markers
//!
//! - `#/` at the start of a line: a top-level note, dropped from the structure
//! - `#//` anywhere else: a trailing comment, removed up to end of line
//! - `#/` after some text: an inline note attached to that line's header

/// Marks a note, both top-level and inline.
pub const NOTE_MARKER: &str = "#/";

/// Marks a trailing comment.
pub const INLINE_COMMENT: &str = "#//";

/// Strip comments from one line.
///
/// Returns an empty string for top-level notes.
pub fn strip_comments(line: &str) -> &str {
    if line.starts_with(NOTE_MARKER) {
        return "";
    }
    match line.find(INLINE_COMMENT) {
        Some(index) => line[..index].trim_end(),
        None => line,
    }
}

/// Strip comments from every line of `input` and drop the lines left blank.
pub fn strip_lines(input: &str) -> Vec<&str> {
    input
        .lines()
        .map(strip_comments)
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Split a line at its first note marker into `(title, note)`, both trimmed.
///
/// Without a marker the line comes back untouched.
pub fn split_note(line: &str) -> (&str, Option<&str>) {
    match line.find(NOTE_MARKER) {
        Some(index) => (
            line[..index].trim(),
            Some(line[index + NOTE_MARKER.len()..].trim()),
        ),
        None => (line, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_note_is_dropped() {
        assert_eq!(strip_comments("#/ IARU Region 1"), "");
        assert_eq!(strip_comments("#// also a top-level note"), "");
    }

    #[test]
    fn test_inline_comment_is_removed() {
        assert_eq!(strip_comments("  band 1M-2M   #// old edge"), "  band 1M-2M");
        assert_eq!(strip_comments("40m"), "40m");
    }

    #[test]
    fn test_inline_note_survives_stripping() {
        assert_eq!(strip_comments("60m #/ region note"), "60m #/ region note");
    }

    #[test]
    fn test_strip_lines_filters_blank_lines() {
        let lines = strip_lines("#/ header\n\n40m\n   \n  band 7M-7.2M #// trimmed\n");
        assert_eq!(lines, vec!["40m", "  band 7M-7.2M"]);
    }

    #[test]
    fn test_strip_lines_handles_crlf() {
        assert_eq!(strip_lines("20m\r\n  type amateur\r\n"), vec!["20m", "  type amateur"]);
    }

    #[test]
    fn test_split_note() {
        assert_eq!(split_note("60m #/ region note"), ("60m", Some("region note")));
        assert_eq!(split_note("#/ only a note"), ("", Some("only a note")));
        assert_eq!(split_note("60m"), ("60m", None));
    }
}
