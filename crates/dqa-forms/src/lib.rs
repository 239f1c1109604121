//! dqa-forms
//!
//! Evaluation form definitions and the decision rules behind them. Pure
//! logic with no store dependency. Defines the fixed HTS_TST checklist, its
//! tallies, and the TX_ML/TX_RTT visit-status classifier.

pub mod checklist;
pub mod error;
pub mod forms;
pub mod overdue;
pub mod quarter;
pub mod visit_status;

use dqa_core::tables;

/// Trait implemented by each evaluation form.
pub trait EvaluationForm: Send + Sync {
    /// Unique identifier for this form (e.g., "hts_tst", "tx_ml").
    fn id(&self) -> &str;

    /// Human-readable title.
    fn name(&self) -> &str;

    /// Column names of the backing table, in sheet order.
    fn columns(&self) -> &[&'static str];

    /// Fixed checklist texts, if the form is a checklist.
    fn criteria(&self) -> &[&'static str] {
        &[]
    }

    /// Rows echoed back after a successful submission.
    fn recent_rows(&self) -> usize {
        5
    }

    /// Rows shown by the history view.
    fn history_rows(&self) -> usize {
        10
    }

    fn header_row(&self) -> Vec<String> {
        tables::header_row(self.columns())
    }
}

/// Return all registered forms.
pub fn all_forms() -> Vec<Box<dyn EvaluationForm>> {
    vec![Box::new(forms::hts_tst::HtsTst), Box::new(forms::tx_ml::TxMl)]
}

/// Look up a form by ID.
pub fn get_form(id: &str) -> Option<Box<dyn EvaluationForm>> {
    all_forms().into_iter().find(|f| f.id() == id)
}
