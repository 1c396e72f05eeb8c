//! Answer resolution for a single field.

use crate::errors::{ResolveError, ResolveResult};
use crate::extract::{extract_labels, LetteredLine};
use crate::schema::Field;

/// A resolved answer option: the key a recorded response uses, and what it means.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Answer {
    pub label: String,
    pub value: String,
}

impl Answer {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl From<LetteredLine<'_>> for Answer {
    fn from(line: LetteredLine<'_>) -> Self {
        Answer::new(line.label, line.value)
    }
}

/// The first declared label that marks the labels as placeholders for a lettered list.
const PLACEHOLDER_LEAD: &str = "A";

/// Resolve one [`Answer`] per declared choice of `field`, in declared order.
///
/// When the first declared label is `"A"` the labels are placeholders and the values are
/// read from the lettered list in the field title; the extracted letters must equal the
/// declared labels position by position. Otherwise every label is its own value.
pub fn resolve_answers(field: &Field) -> ResolveResult<Vec<Answer>> {
    let choices = field.choices();
    let first = match choices.first() {
        Some(first) => first,
        None => {
            return Err(ResolveError::MissingChoices {
                field_ref: field.reference.clone(),
            })
        }
    };

    if first.label != PLACEHOLDER_LEAD {
        return Ok(choices
            .iter()
            .map(|c| Answer::new(c.label.as_str(), c.label.as_str()))
            .collect());
    }

    let extracted: Vec<LetteredLine<'_>> = extract_labels(&field.title).collect();
    let lines_up = extracted.len() == choices.len()
        && extracted
            .iter()
            .zip(choices)
            .all(|(line, choice)| line.label == choice.label);

    if !lines_up {
        return Err(ResolveError::ExtractionMismatch {
            field_ref: field.reference.clone(),
            title: field.title.clone(),
            declared: choices.iter().map(|c| c.label.clone()).collect(),
            extracted: extracted.iter().map(|l| l.label.to_string()).collect(),
        });
    }

    Ok(extracted.into_iter().map(Answer::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: &str = "Which state do you currently live in?\n- A. foo 91  bar\n- B. Jharkhand\n- C. Odisha\n- D. Uttar Pradesh";

    fn lettered(title: &str) -> Field {
        Field::new("20218ad0", "multiple_choice", title).with_choices(vec!["A", "B", "C", "D"])
    }

    #[test]
    fn test_plain_labels_are_their_own_values() {
        let field = Field::new("gender", "multiple_choice", "What is your gender? ")
            .with_choices(vec!["Male", "Female", "Other"]);

        assert_eq!(
            resolve_answers(&field).unwrap(),
            vec![
                Answer::new("Male", "Male"),
                Answer::new("Female", "Female"),
                Answer::new("Other", "Other"),
            ]
        );
    }

    #[test]
    fn test_placeholder_labels_read_from_title() {
        let field = lettered("Q?\n- A. foo\n- B. bar\n- C. baz\n- D. qux");

        assert_eq!(
            resolve_answers(&field).unwrap(),
            vec![
                Answer::new("A", "foo"),
                Answer::new("B", "bar"),
                Answer::new("C", "baz"),
                Answer::new("D", "qux"),
            ]
        );
    }

    #[test]
    fn test_values_keep_inner_spacing() {
        let answers = resolve_answers(&lettered(STATES)).unwrap();
        assert_eq!(answers[0], Answer::new("A", "foo 91  bar"));
        assert_eq!(answers[3], Answer::new("D", "Uttar Pradesh"));
    }

    #[test]
    fn test_no_choices() {
        let field = Field::new("20218ad0", "multiple_choice", "What is your gender? ");

        assert_eq!(
            resolve_answers(&field),
            Err(ResolveError::MissingChoices {
                field_ref: "20218ad0".to_string()
            })
        );
    }

    #[test]
    fn test_bad_formats_are_rejected() {
        let titles = [
            // marker not at the start of a line
            "Which state do you currently live in?A. foo 91  bar\nB. Jharkhand\nC. Odisha\nD. Uttar Pradesh",
            // repeated letter
            "Which state do you currently live in?\nA. foo 91  bar\nB. Jharkhand\nC. Odisha\nA. Uttar Pradesh",
            // missing letter
            "Which state do you currently live in?\nA- foo 91  bar\nB- Jharkhand\nC- Odisha\n",
            // no separator
            "Which state do you currently live in?\nAfoo 91  bar\nB- Jharkhand\nC- Odisha\nD- Uttar Pradesh",
        ];

        for title in titles.iter() {
            match resolve_answers(&lettered(title)) {
                Err(ResolveError::ExtractionMismatch { field_ref, declared, .. }) => {
                    assert_eq!(field_ref, "20218ad0");
                    assert_eq!(declared, vec!["A", "B", "C", "D"]);
                }
                other => panic!("expected extraction mismatch for {:?}, got {:?}", title, other),
            }
        }
    }

    #[test]
    fn test_mismatch_reports_what_was_found() {
        let err = resolve_answers(&lettered("Q\nA. one\nB. two\nC. three\nA. four")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::ExtractionMismatch {
                field_ref: "20218ad0".to_string(),
                title: "Q\nA. one\nB. two\nC. three\nA. four".to_string(),
                declared: vec!["A", "B", "C", "D"].into_iter().map(String::from).collect(),
                extracted: vec!["A", "B", "C", "A"].into_iter().map(String::from).collect(),
            }
        );
    }

    #[test]
    fn test_extra_lettered_lines_are_rejected() {
        let field = Field::new("r", "multiple_choice", "Q\nA. one\nB. two\nC. three")
            .with_choices(vec!["A", "B"]);
        assert!(matches!(
            resolve_answers(&field),
            Err(ResolveError::ExtractionMismatch { .. })
        ));
    }

    #[test]
    fn test_lettered_title_ignored_without_placeholder_lead() {
        let field = Field::new("r", "multiple_choice", "Q\nA. one\nB. two").with_choices(vec!["B", "A"]);
        assert_eq!(
            resolve_answers(&field).unwrap(),
            vec![Answer::new("B", "B"), Answer::new("A", "A")]
        );
    }
}
