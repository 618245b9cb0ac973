//! MIME type detection based on file extensions.

/// Maps a file path to a Content-Type by its suffix, case-insensitively.
///
/// Unknown suffixes fall back to `application/octet-stream`.
pub fn detect(path: &str) -> &'static str {
    if ends_with_ignore_case(path, ".html") {
        "text/html"
    } else if ends_with_ignore_case(path, ".css") {
        "text/css"
    } else if ends_with_ignore_case(path, ".js") {
        "application/javascript"
    } else if ends_with_ignore_case(path, ".json") {
        "application/json"
    } else if ends_with_ignore_case(path, ".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}

fn ends_with_ignore_case(value: &str, suffix: &str) -> bool {
    let (value, suffix) = (value.as_bytes(), suffix.as_bytes());
    value.len() >= suffix.len()
        && value[value.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_is_case_insensitive() {
        assert_eq!(detect("INDEX.HTML"), "text/html");
        assert_eq!(detect("style.CSS"), "text/css");
    }

    #[test]
    fn detect_unknown_suffix() {
        assert_eq!(detect("archive.tar.gz"), "application/octet-stream");
        assert_eq!(detect("noext"), "application/octet-stream");
    }
}
