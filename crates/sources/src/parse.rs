use quiz_core::model::{Question, QuestionDraft};

use crate::source::SourceError;

/// Parse a JSON array of question records.
///
/// The whole set is rejected on the first bad record: a missing or mistyped field yields
/// `SourceError::Malformed`, a well-shaped record that breaks a question invariant yields
/// `SourceError::InvalidRecord` with its position.
///
/// # Errors
///
/// See above.
pub fn parse_question_set(path: &str, bytes: &[u8]) -> Result<Vec<Question>, SourceError> {
    let drafts: Vec<QuestionDraft> =
        serde_json::from_slice(bytes).map_err(|e| SourceError::Malformed {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft.validate().map_err(|source| SourceError::InvalidRecord {
                path: path.to_string(),
                index,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionError;

    #[test]
    fn parses_records_in_order() {
        let json = br#"[
            {"question":"2+2?","options":["3","4"],"answer":1,"explanation":"math"},
            {"question":"Sky?","options":["blue","green","red"],"answer":0,"explanation":"look up"}
        ]"#;

        let questions = parse_question_set("/q.json", json).unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].correct_option(), "4");
        assert_eq!(questions[1].prompt(), "Sky?");
    }

    #[test]
    fn empty_array_is_valid_and_empty() {
        assert!(parse_question_set("/q.json", b"[]").unwrap().is_empty());
    }

    #[test]
    fn record_missing_a_field_fails_the_whole_set() {
        let json = br#"[
            {"question":"ok","options":["a","b"],"answer":0,"explanation":""},
            {"question":"no explanation","options":["a","b"],"answer":0}
        ]"#;

        let err = parse_question_set("/q.json", json).unwrap_err();
        assert!(matches!(err, SourceError::Malformed { ref path, .. } if path == "/q.json"));
        assert!(!err.is_transport());
    }

    #[test]
    fn non_array_payload_is_malformed() {
        let err = parse_question_set("/q.json", br#"{"question":"x"}"#).unwrap_err();
        assert!(matches!(err, SourceError::Malformed { .. }));

        let err = parse_question_set("/q.json", b"<html>404</html>").unwrap_err();
        assert!(matches!(err, SourceError::Malformed { .. }));
    }

    #[test]
    fn invariant_violation_reports_record_index() {
        let json = br#"[
            {"question":"ok","options":["a","b"],"answer":0,"explanation":""},
            {"question":"bad","options":["a","b"],"answer":2,"explanation":""}
        ]"#;

        let err = parse_question_set("/q.json", json).unwrap_err();
        assert_eq!(
            err,
            SourceError::InvalidRecord {
                path: "/q.json".into(),
                index: 1,
                source: QuestionError::CorrectIndexOutOfRange { index: 2, len: 2 },
            }
        );
    }
}
