use dqa_core::tables::TX_ML_COLUMNS;

use crate::EvaluationForm;

/// TX_ML / TX_RTT patient visit-status evaluation.
pub struct TxMl;

impl EvaluationForm for TxMl {
    fn id(&self) -> &str {
        "tx_ml"
    }

    fn name(&self) -> &str {
        "TX_ML and TX_RTT evaluation"
    }

    fn columns(&self) -> &[&'static str] {
        &TX_ML_COLUMNS
    }
}
