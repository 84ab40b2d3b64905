//! Slide index encoding in route paths
//!
//! The slide index is the path component right after the leading `/`,
//! so `/3` and `/3/notes` both address slide 3.

/// Parse the slide index out of a route path.
///
/// Leading whitespace and a `+` sign are accepted before the digits, and
/// anything after the digits is ignored (`/3abc` is slide 3). Returns
/// `None` for a missing segment, a segment without leading digits, a
/// negative number, or a value that does not fit in `usize`.
pub fn parse_slide_index(path: &str) -> Option<usize> {
    let segment = path.split('/').nth(1)?;
    let trimmed = segment.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }

    unsigned[..digits_len].parse().ok()
}

/// Parse the slide index, falling back to the first slide
pub fn slide_index_or_default(path: &str) -> usize {
    parse_slide_index(path).unwrap_or(0)
}

/// Path that addresses a slide
pub fn slide_path(index: usize) -> String {
    format!("/{}", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_index() {
        assert_eq!(parse_slide_index("/3"), Some(3));
        assert_eq!(parse_slide_index("/0"), Some(0));
    }

    #[test]
    fn test_trailing_segments_ignored() {
        assert_eq!(parse_slide_index("/3/anything"), Some(3));
        assert_eq!(parse_slide_index("/2/x"), Some(2));
        assert_eq!(parse_slide_index("/12abc"), Some(12));
    }

    #[test]
    fn test_malformed_paths() {
        assert_eq!(parse_slide_index("/abc"), None);
        assert_eq!(parse_slide_index("/"), None);
        assert_eq!(parse_slide_index(""), None);
        assert_eq!(parse_slide_index("3"), None);
        assert_eq!(parse_slide_index("//3"), None);
        assert_eq!(parse_slide_index("/-2"), None);
        assert_eq!(parse_slide_index("/99999999999999999999999999"), None);
    }

    #[test]
    fn test_sign_and_whitespace() {
        assert_eq!(parse_slide_index("/+4"), Some(4));
        assert_eq!(parse_slide_index("/ 5"), Some(5));
    }

    #[test]
    fn test_default_and_render() {
        assert_eq!(slide_index_or_default("/abc"), 0);
        assert_eq!(slide_index_or_default("/7"), 7);
        assert_eq!(slide_path(4), "/4");
        assert_eq!(parse_slide_index(&slide_path(9)), Some(9));
    }
}
