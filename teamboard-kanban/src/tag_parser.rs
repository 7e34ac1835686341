//! Parse the comma-separated tag input of the task forms.
//!
//! Each segment is trimmed. Order and duplicates are preserved, and so are
//! blank segments: `"a,,b"` yields `["a", "", "b"]`. Only an empty input
//! yields no tags.

/// Split a comma-separated tag string into an ordered tag list.
pub fn parse_tags(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    input.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Render a tag list back into the form's comma-separated representation.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_whitespace_input_is_one_blank_tag() {
        assert_eq!(parse_tags("   "), vec![""]);
    }

    #[test]
    fn test_trims_and_keeps_duplicates() {
        assert_eq!(parse_tags("a, b ,a"), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_keeps_inner_spaces() {
        assert_eq!(
            parse_tags("UI/UX, High Priority"),
            vec!["UI/UX", "High Priority"]
        );
    }

    #[test]
    fn test_blank_segments_kept() {
        assert_eq!(parse_tags("a,,b,"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_join_round_trips_form_value() {
        let tags = parse_tags("Backend, Security");
        assert_eq!(join_tags(&tags), "Backend, Security");

        let tags = parse_tags("a,,b");
        assert_eq!(join_tags(&tags), "a, , b");
        assert_eq!(parse_tags(&join_tags(&tags)), tags);
    }
}
