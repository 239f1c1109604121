use dqa_core::models::checklist::ChecklistCriterion;
use dqa_core::tables::HTS_TST_COLUMNS;

use crate::EvaluationForm;

/// The ten HTS_TST register checks, in the order they are asked.
pub const CRITERIA: [&str; 10] = [
    "Numeración correlativa (no celdas ocultas)",
    "Variables ingresadas según catálogo",
    "Ingreso de nombre de sitio aledaño cuando corresponde",
    "Fecha de diagnóstico corresponde a período de evaluación",
    "Ingreso de variables de Dx positivo únicamente en registros positivos",
    "Ingreso de lugar de vinculación a pacientes vinculados",
    "Fecha inicio de TARV posterior a fecha de Diagnóstico",
    "Fecha de CD4 con coherencia lógica según fecha de Dx",
    "Fecha de CV con coherencia lógica según fecha de Dx",
    "Ingreso de variable embarazada únicamente en sexo femenino",
];

/// HTS_TST data-quality checklist.
pub struct HtsTst;

impl EvaluationForm for HtsTst {
    fn id(&self) -> &str {
        "hts_tst"
    }

    fn name(&self) -> &str {
        "HTS_TST data quality checklist"
    }

    fn columns(&self) -> &[&'static str] {
        &HTS_TST_COLUMNS
    }

    fn criteria(&self) -> &[&'static str] {
        &CRITERIA
    }
}

/// An unanswered checklist. Both radios start on "Sí", like the paper form.
pub fn blank_criteria() -> Vec<ChecklistCriterion> {
    CRITERIA
        .iter()
        .map(|text| ChecklistCriterion {
            text: text.to_string(),
            compliant: true,
            corrective_action_taken: true,
            note: String::new(),
        })
        .collect()
}
