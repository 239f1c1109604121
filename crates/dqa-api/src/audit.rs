use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// A structured record of one saved evaluation.
///
/// Emitted through `tracing` so it lands in the same log stream as the
/// request log; the store row itself carries no submission id.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub form_id: String,
    pub submission_id: Uuid,
    pub reviewer_name: String,
    pub unit_name: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        form_id: impl Into<String>,
        submission_id: Uuid,
        reviewer_name: impl Into<String>,
        unit_name: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            form_id: form_id.into(),
            submission_id,
            reviewer_name: reviewer_name.into(),
            unit_name: unit_name.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = %self.action,
            audit.form_id = %self.form_id,
            audit.submission_id = %self.submission_id,
            audit.reviewer = %self.reviewer_name,
            audit.unit = %self.unit_name,
            audit.details = %details,
            "audit event"
        );
    }
}
