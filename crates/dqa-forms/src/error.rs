use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form: {0}")]
    UnknownForm(String),

    #[error("checklist must have {expected} criteria, got {actual}")]
    CriteriaCount { expected: usize, actual: usize },

    #[error("criterion {position} should be '{expected}', got '{actual}'")]
    CriterionMismatch {
        position: usize,
        expected: String,
        actual: String,
    },

    #[error("at least one record must be reviewed")]
    NoRecordsReviewed,
}
