use crate::error::{AuditError, Result};
use crate::questionnaire;
use crate::types::question::{AnswerOption, QuestionId};
use std::collections::BTreeMap;

/// Snapshot of the user's selections, one option per answered question.
///
/// Owned by the caller; the scoring engine only borrows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    selections: BTreeMap<QuestionId, usize>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates raw `key -> label` pairs.
    ///
    /// Blank labels count as unanswered. Unknown keys and labels that are not
    /// among the question's options are errors, so a typo never scores as 0.
    pub fn from_raw<'a, I>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut answers = Self::new();
        for (key, label) in raw {
            let id: QuestionId = key
                .parse()
                .map_err(|_| AuditError::UnknownQuestion(key.clone()))?;
            if label.trim().is_empty() {
                answers.clear(id);
                continue;
            }
            answers.select(id, label)?;
        }
        Ok(answers)
    }

    /// Records `label` for `id`, replacing any previous selection.
    pub fn select(&mut self, id: QuestionId, label: &str) -> Result<()> {
        let question = questionnaire::question(id);
        let index = question
            .option_index(label)
            .ok_or_else(|| AuditError::InvalidAnswer {
                key: id.key(),
                label: label.to_string(),
                expected: question.labels().join(" | "),
            })?;
        self.selections.insert(id, index);
        Ok(())
    }

    pub fn clear(&mut self, id: QuestionId) {
        self.selections.remove(&id);
    }

    pub fn get(&self, id: QuestionId) -> Option<&'static AnswerOption> {
        self.selections
            .get(&id)
            .map(|index| &questionnaire::question(id).options[*index])
    }

    pub fn label(&self, id: QuestionId) -> Option<&'static str> {
        self.get(id).map(|option| option.label)
    }

    pub fn is_answered(&self, id: QuestionId) -> bool {
        self.selections.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}
