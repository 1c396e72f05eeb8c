//! Lettered list extraction.
//!
//! Some questions declare placeholder choices (`A`, `B`, `C`, ...) and spell out the real
//! options in the question text:
//!
//! ```text
//! Which state do you currently live in?
//! - A. Chhattisgarh
//! - B. Jharkhand
//! ```
//!
//! [`extract_labels`] scans such a block line by line and yields each `(letter, value)`
//! pair in the order it appears. Recognized line shapes:
//!
//! - Dash prefixed: `-`, an optional space, the letter, then one or more separators from
//!   space, tab, form feed, dash punctuation, `.` and `)`: `- A. foo`, `-B) foo`, `- C foo`
//! - Bare: the letter, one or more of dash punctuation, `.` and `)`, then at most one
//!   space, tab or form feed: `A. foo`, `B- foo`, `C-\tfoo`, `D.)foo`
//!
//! Other whitespace, such as a no-break or ideographic space, is never a separator.
//!
//! A marker must start a line. Duplicate letters are yielded as found.

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};

static LETTERED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\n)(?:- ?([A-Z])(?:[ \t\x0C]|[\p{Pd}.)])+|([A-Z])[\p{Pd}.)]+[ \t\x0C]?)([^\n]+)")
        .expect("Invalid lettered line regex")
});

/// One matched line of a lettered list, borrowing from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetteredLine<'t> {
    /// The single uppercase marker letter.
    pub label: &'t str,
    /// The remainder of the line.
    pub value: &'t str,
}

/// Lazy iterator over the lettered lines of a text block.
pub struct Labels<'t> {
    captures: CaptureMatches<'static, 't>,
}

impl<'t> Iterator for Labels<'t> {
    type Item = LetteredLine<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.next()?;
        // Exactly one of the two marker groups participates in a match.
        let label = caps.get(1).or_else(|| caps.get(2))?.as_str();
        let value = caps.get(3)?.as_str();
        Some(LetteredLine { label, value })
    }
}

/// Scan `text` for lettered answer lines.
///
/// Pure and restartable: calling again on the same text yields the same sequence. Text
/// without any lettered line yields nothing.
pub fn extract_labels(text: &str) -> Labels<'_> {
    Labels {
        captures: LETTERED_LINE.captures_iter(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(&str, &str)> {
        extract_labels(text).map(|l| (l.label, l.value)).collect()
    }

    const EXPECTED: [(&str, &str); 4] = [
        ("A", "foo 91  bar"),
        ("B", "Jharkhand"),
        ("C", "Odisha"),
        ("D", "Uttar Pradesh"),
    ];

    #[test]
    fn test_no_separator_is_not_a_marker() {
        assert!(pairs("A dog walks in").is_empty());
    }

    #[test]
    fn test_single_line() {
        assert_eq!(pairs("A. dog walks in"), vec![("A", "dog walks in")]);
    }

    #[test]
    fn test_dash_prefixed_without_space() {
        assert_eq!(
            pairs("-A. dog walks in\n-B. cat walks in"),
            vec![("A", "dog walks in"), ("B", "cat walks in")]
        );
    }

    #[test]
    fn test_dash_prefixed_accepts_plain_space_separator() {
        assert_eq!(pairs("Q?\n- A foo\n-B bar"), vec![("A", "foo"), ("B", "bar")]);
    }

    #[test]
    fn test_separator_variants() {
        let titles = [
            "Which state do you currently live in?\n- A. foo 91  bar\n- B. Jharkhand\n- C. Odisha\n- D. Uttar Pradesh",
            "Which state do you currently live in?\nA. foo 91  bar\nB. Jharkhand\nC. Odisha\nD. Uttar Pradesh",
            "Which state do you currently live in?\nA- foo 91  bar\nB- Jharkhand\nC- Odisha\nD- Uttar Pradesh",
            "Which state do you currently live in?\nA-\tfoo 91  bar\nB-\tJharkhand\nC-\tOdisha\nD-\tUttar Pradesh",
            "Which state do you currently live in?\nA-foo 91  bar\nB-Jharkhand\nC-Odisha\nD-Uttar Pradesh",
            "Which state do you currently live in?\n- A.. foo 91  bar\n- B.) Jharkhand\n- C. Odisha\n- D. Uttar Pradesh",
            "Which state do you currently live in?\nA) foo 91  bar\nB) Jharkhand\nC) Odisha\nD) Uttar Pradesh",
            "Which state do you currently live in?\nA\u{2013} foo 91  bar\nB\u{2014} Jharkhand\nC. Odisha\nD. Uttar Pradesh",
        ];

        for title in titles.iter() {
            assert_eq!(pairs(title), EXPECTED.to_vec(), "title: {:?}", title);
        }
    }

    #[test]
    fn test_non_ascii_whitespace_is_not_a_separator() {
        assert!(pairs("Q\n- A\u{a0}foo\n- B\u{3000}bar\n- C\u{2028}baz").is_empty());
        assert!(pairs("A\u{a0}foo").is_empty());

        // After a bare marker the space is part of the value.
        assert_eq!(pairs("Q\nA.\u{a0}foo"), vec![("A", "\u{a0}foo")]);
        assert_eq!(pairs("Q\nB)\u{3000}bar"), vec![("B", "\u{3000}bar")]);
    }

    #[test]
    fn test_form_feed_is_a_separator() {
        assert_eq!(pairs("- A\x0Cfoo\nB.\x0Cbar"), vec![("A", "foo"), ("B", "bar")]);
    }

    #[test]
    fn test_marker_must_start_a_line() {
        let found = pairs("Which state do you currently live in?A. foo 91  bar\nB. Jharkhand");
        assert_eq!(found, vec![("B", "Jharkhand")]);
    }

    #[test]
    fn test_lowercase_and_non_latin_markers_are_ignored() {
        assert!(pairs("a. foo\nb. bar").is_empty());
        assert!(pairs("Б. foo").is_empty());
    }

    #[test]
    fn test_values_keep_their_script() {
        let title = "वर्तमान में आप किस राज्य में रहते हैं?\n- A. छत्तीसगढ़\n- B. झारखंड";
        assert_eq!(pairs(title), vec![("A", "छत्तीसगढ़"), ("B", "झारखंड")]);
    }

    #[test]
    fn test_duplicates_are_not_rejected() {
        let found = pairs("A. foo\nB. bar\nA. baz");
        assert_eq!(found, vec![("A", "foo"), ("B", "bar"), ("A", "baz")]);
    }

    #[test]
    fn test_restartable() {
        let text = "Q\nA. one\nB. two";
        let first: Vec<_> = extract_labels(text).collect();
        let second: Vec<_> = extract_labels(text).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_empty_text() {
        assert!(pairs("").is_empty());
        assert!(pairs("Just a question?").is_empty());
    }
}
