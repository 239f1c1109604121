use dqa_core::models::checklist::{ChecklistCriterion, ChecklistTally, HtsTstSubmission};

use crate::error::FormError;
use crate::forms::hts_tst::CRITERIA;

/// Count answers over any slice of criteria, complete or not.
pub fn tally(criteria: &[ChecklistCriterion]) -> ChecklistTally {
    criteria.iter().fold(ChecklistTally::default(), |mut t, c| {
        t.total += 1;
        if c.compliant {
            t.compliant += 1;
        } else {
            t.non_compliant += 1;
        }
        if c.corrective_action_taken {
            t.corrective_actions += 1;
        }
        t
    })
}

/// A submission must answer every fixed criterion, in order.
pub fn validate_submission(submission: &HtsTstSubmission) -> Result<(), FormError> {
    if submission.header.records_reviewed == 0 {
        return Err(FormError::NoRecordsReviewed);
    }

    if submission.criteria.len() != CRITERIA.len() {
        return Err(FormError::CriteriaCount {
            expected: CRITERIA.len(),
            actual: submission.criteria.len(),
        });
    }

    for (i, (answered, expected)) in submission.criteria.iter().zip(CRITERIA).enumerate() {
        if answered.text != expected {
            return Err(FormError::CriterionMismatch {
                position: i + 1,
                expected: expected.to_string(),
                actual: answered.text.clone(),
            });
        }
    }

    Ok(())
}
