use super::domain::{ImportanceLevel, ValueResponse};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ResponseImportError {
    #[error("failed to read response export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid response CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("question {question_id} has importance {importance}; expected 1-5")]
    ImportanceOutOfRange { question_id: String, importance: u8 },
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    question_id: String,
    importance: u8,
}

/// Loads questionnaire answers exported as `question_id,importance` rows.
pub struct ResponseImporter;

impl ResponseImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ValueResponse>, ResponseImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ValueResponse>, ResponseImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut responses = Vec::new();

        for record in csv_reader.deserialize::<ResponseRow>() {
            let row = record?;
            if row.question_id.is_empty() {
                continue;
            }
            if ImportanceLevel::from_score(row.importance).is_none() {
                return Err(ResponseImportError::ImportanceOutOfRange {
                    question_id: row.question_id,
                    importance: row.importance,
                });
            }
            responses.push(ValueResponse::new(row.question_id, row.importance));
        }

        Ok(responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_trimmed_rows() {
        let csv = "question_id, importance\nautonomy_1, 5\n creativity_2 ,3\n";

        let responses = ResponseImporter::from_reader(Cursor::new(csv)).expect("csv parses");

        assert_eq!(
            responses,
            vec![
                ValueResponse::new("autonomy_1", 5),
                ValueResponse::new("creativity_2", 3),
            ]
        );
    }

    #[test]
    fn rejects_importance_outside_scale() {
        let csv = "question_id,importance\nautonomy_1,7\n";

        let err = ResponseImporter::from_reader(Cursor::new(csv)).expect_err("out of range");

        match err {
            ResponseImportError::ImportanceOutOfRange {
                question_id,
                importance,
            } => {
                assert_eq!(question_id, "autonomy_1");
                assert_eq!(importance, 7);
            }
            other => panic!("expected range error, got {other:?}"),
        }
    }

    #[test]
    fn reports_malformed_rows() {
        let csv = "question_id,importance\nautonomy_1,very\n";

        let err = ResponseImporter::from_reader(Cursor::new(csv)).expect_err("bad number");

        assert!(matches!(err, ResponseImportError::Csv(_)));
    }
}
