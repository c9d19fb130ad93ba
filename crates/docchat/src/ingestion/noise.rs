//! Page-number artifact removal
//!
//! Extracted PDF and slide text frequently carries the page number as a line
//! of its own. Those lines are noise for line-based retrieval, so they are
//! dropped before splitting. A number embedded in other text ("Page 3 of 10")
//! is content and stays.

/// Remove lines whose trimmed content is nothing but decimal digits.
///
/// Every other line, including blank ones, passes through verbatim. Blank
/// lines are the splitter's concern, not this filter's.
pub fn strip_page_numbers(text: &str) -> String {
    text.lines()
        .filter(|line| !is_page_number(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_page_number(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_isolated_numbers_only() {
        let text = "Chapter 1\n12\nPage 12\n";
        assert_eq!(strip_page_numbers(text), "Chapter 1\nPage 12");
    }

    #[test]
    fn drops_whitespace_padded_numbers() {
        assert_eq!(strip_page_numbers("intro\n   7  \noutro"), "intro\noutro");
    }

    #[test]
    fn keeps_blank_lines() {
        assert_eq!(strip_page_numbers("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn keeps_mixed_digit_lines() {
        assert_eq!(strip_page_numbers("3.14"), "3.14");
        assert_eq!(strip_page_numbers("Q1 2024"), "Q1 2024");
        assert_eq!(strip_page_numbers("-12"), "-12");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(strip_page_numbers(""), "");
    }
}
