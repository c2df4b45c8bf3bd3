pub mod guidance;
pub mod json;
pub mod md;
pub mod meters;
pub mod questions;

use crate::error::{AuditError, Result};
use crate::scoring::observations::{structural_observations, Observation};
use crate::scoring::{self, level_for, overall_level};
use crate::types::answers::AnswerSet;
use crate::types::config::AuditConfig;
use crate::types::scoring::{Level, OverallLevel, ScoreRecord, CATEGORY_MAX};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionLevels {
    pub identity: Level,
    pub archive: Level,
    pub workflow: Level,
    pub redundancy: Level,
}

impl DimensionLevels {
    pub fn from_record(record: &ScoreRecord) -> Self {
        Self {
            identity: level_for(record.identity_score, record.identity_max),
            archive: level_for(record.archive_score, record.archive_max),
            workflow: level_for(record.workflow_score, record.workflow_max),
            redundancy: level_for(record.redundancy_strength, CATEGORY_MAX),
        }
    }
}

/// Final results for a completed assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub generated_at: String,
    pub scores: ScoreRecord,
    pub levels: DimensionLevels,
    pub overall_level: OverallLevel,
    pub observations: Vec<Observation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeout_size_gb: Option<f64>,
    #[serde(skip)]
    pub guidance: bool,
}

impl AuditReport {
    /// Fails with `IncompleteAssessment` while any required key is unanswered.
    pub fn build(answers: &AnswerSet, config: &AuditConfig) -> Result<Self> {
        let missing = scoring::unanswered_keys(answers);
        if !missing.is_empty() {
            return Err(AuditError::IncompleteAssessment(
                missing.iter().map(|id| id.key()).collect(),
            ));
        }

        let scores = scoring::compute(answers);
        Ok(Self {
            generated_at: Utc::now().to_rfc3339(),
            levels: DimensionLevels::from_record(&scores),
            overall_level: overall_level(scores.lock_in_index),
            observations: structural_observations(&scores),
            scores,
            takeout_size_gb: config.takeout_size_gb(),
            guidance: config.guidance(),
        })
    }
}

pub fn render(report: &AuditReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(AuditError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::questionnaire;
    use crate::types::answers::AnswerSet;

    /// Every question answered with the option at `pick(option_count)`,
    /// clamped to the last option.
    pub fn answered(pick: impl Fn(usize) -> usize) -> AnswerSet {
        let mut answers = AnswerSet::new();
        for question in &questionnaire::QUESTIONS {
            let index = pick(question.options.len()).min(question.options.len() - 1);
            answers
                .select(question.id, question.options[index].label)
                .expect("table label should validate");
        }
        answers
    }
}
