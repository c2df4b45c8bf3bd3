pub mod levels;
pub mod observations;

pub use levels::{level_for, overall_level};

use crate::questionnaire;
use crate::types::answers::AnswerSet;
use crate::types::question::{Category, QuestionId};
use crate::types::scoring::{Score, ScoreRecord, CATEGORY_MAX, LOCK_IN_MAX};

/// Points for one raw label. Absent labels, unknown questions and labels
/// outside the question's table all score 0.
pub fn score_question(category: Category, question_index: usize, label: Option<&str>) -> Score {
    questionnaire::find(category, question_index)
        .map(|question| question.points_for(label))
        .unwrap_or(0)
}

pub fn category_score(answers: &AnswerSet, category: Category) -> Score {
    questionnaire::section(category)
        .map(|question| score_question(category, question.id.index(), answers.label(question.id)))
        .sum()
}

pub fn compute(answers: &AnswerSet) -> ScoreRecord {
    let identity_score = category_score(answers, Category::Identity);
    let archive_score = category_score(answers, Category::Archive);
    let workflow_score = category_score(answers, Category::Workflow);
    let resilience_exposure = category_score(answers, Category::Resilience);

    let risk_total = identity_score + archive_score + workflow_score;
    let Composite {
        resilience_benefit,
        capped_benefit,
        lock_in_index,
    } = composite(risk_total, resilience_exposure);

    tracing::debug!(
        identity_score,
        archive_score,
        workflow_score,
        resilience_exposure,
        capped_benefit,
        lock_in_index,
        "computed scores"
    );

    ScoreRecord {
        identity_score,
        identity_max: Category::Identity.max_score(),
        archive_score,
        archive_max: Category::Archive.max_score(),
        workflow_score,
        workflow_max: Category::Workflow.max_score(),
        resilience_exposure,
        redundancy_strength: resilience_benefit,
        risk_total,
        resilience_benefit,
        capped_benefit,
        lock_in_index,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composite {
    pub resilience_benefit: Score,
    pub capped_benefit: Score,
    pub lock_in_index: Score,
}

/// Raw risk mitigated by redundancy. Resilience offsets at most half of the
/// raw risk (rounded down), and the result stays within `0..=39`.
pub fn composite(risk_total: Score, resilience_exposure: Score) -> Composite {
    let resilience_benefit = CATEGORY_MAX.saturating_sub(resilience_exposure);
    let capped_benefit = resilience_benefit.min(risk_total / 2);
    let lock_in_index = risk_total.saturating_sub(capped_benefit).clamp(0, LOCK_IN_MAX);
    Composite {
        resilience_benefit,
        capped_benefit,
        lock_in_index,
    }
}

/// Required keys not yet answered, in questionnaire order.
pub fn unanswered_keys(answers: &AnswerSet) -> Vec<QuestionId> {
    questionnaire::required_ids()
        .filter(|id| !answers.is_answered(*id))
        .collect()
}

pub fn is_complete(answers: &AnswerSet) -> bool {
    unanswered_keys(answers).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::OverallLevel;

    /// Answers every question with its highest option worth at most
    /// `points(id)`.
    fn answers_with(points: impl Fn(QuestionId) -> Score) -> AnswerSet {
        let mut answers = AnswerSet::new();
        for question in &questionnaire::QUESTIONS {
            let wanted = points(question.id);
            let option = question
                .options
                .iter()
                .filter(|option| option.points <= wanted)
                .max_by_key(|option| option.points)
                .expect("every question offers a zero option");
            answers
                .select(question.id, option.label)
                .expect("table label should validate");
        }
        answers
    }

    fn all_answer_sets() -> Vec<AnswerSet> {
        // One snapshot per (question, option) on top of a mixed baseline.
        let mut sets = Vec::new();
        for question in &questionnaire::QUESTIONS {
            for option in question.options {
                let mut answers = answers_with(|id| if id.index() % 2 == 0 { 3 } else { 0 });
                answers
                    .select(question.id, option.label)
                    .expect("table label should validate");
                sets.push(answers);
            }
        }
        sets
    }

    #[test]
    fn score_question_uses_the_fixed_tables() {
        assert_eq!(score_question(Category::Identity, 1, Some("Yes, for almost everything")), 3);
        assert_eq!(score_question(Category::Identity, 2, Some("I'm not sure")), 3);
        assert_eq!(score_question(Category::Archive, 4, Some("Yes, regularly")), 0);
        assert_eq!(score_question(Category::Resilience, 3, Some("I'm not sure what that is")), 2);
        assert_eq!(score_question(Category::Workflow, 4, Some("Minimal disruption")), 1);
    }

    #[test]
    fn score_question_is_fail_soft() {
        assert_eq!(score_question(Category::Identity, 1, None), 0);
        assert_eq!(score_question(Category::Identity, 1, Some("Maybe")), 0);
        assert_eq!(score_question(Category::Archive, 9, Some("No")), 0);
    }

    #[test]
    fn empty_answers_score_zero_risk_and_full_exposure_credit() {
        let record = compute(&AnswerSet::new());
        assert_eq!(record.risk_total, 0);
        assert_eq!(record.resilience_exposure, 0);
        assert_eq!(record.redundancy_strength, 12);
        assert_eq!(record.lock_in_index, 0);
    }

    #[test]
    fn all_minimum_answers_yield_low() {
        let record = compute(&answers_with(|_| 0));
        assert_eq!(record.identity_score, 0);
        assert_eq!(record.archive_score, 0);
        assert_eq!(record.workflow_score, 0);
        assert_eq!(record.redundancy_strength, 12);
        assert_eq!(record.lock_in_index, 0);
        assert_eq!(overall_level(record.lock_in_index), OverallLevel::Low);
    }

    #[test]
    fn all_maximum_answers_yield_high() {
        let record = compute(&answers_with(|_| 3));
        assert_eq!(record.identity_score, 15);
        assert_eq!(record.archive_score, 12);
        assert_eq!(record.workflow_score, 12);
        assert_eq!(record.risk_total, 39);
        // re_q4 tops out at 2 points.
        assert_eq!(record.resilience_exposure, 11);
        assert_eq!(record.redundancy_strength, 1);
        assert_eq!(record.capped_benefit, 1);
        assert_eq!(record.lock_in_index, 38);
        assert_eq!(overall_level(record.lock_in_index), OverallLevel::High);
    }

    #[test]
    fn composite_without_redundancy_keeps_full_risk() {
        let result = composite(39, 12);
        assert_eq!(result.resilience_benefit, 0);
        assert_eq!(result.capped_benefit, 0);
        assert_eq!(result.lock_in_index, 39);
        assert_eq!(overall_level(result.lock_in_index), OverallLevel::High);
    }

    #[test]
    fn composite_cap_holds_across_the_grid() {
        for risk_total in 0..=39 {
            for exposure in 0..=12 {
                let result = composite(risk_total, exposure);
                assert!(result.lock_in_index <= 39);
                assert!(result.lock_in_index >= risk_total - risk_total / 2);
                assert!(result.capped_benefit <= 12 - exposure);
            }
        }
    }

    #[test]
    fn mitigation_is_capped_at_half_the_risk() {
        let record = compute(&answers_with(|id| {
            if id.category() == Category::Identity {
                3
            } else {
                0
            }
        }));
        assert_eq!(record.risk_total, 15);
        assert_eq!(record.redundancy_strength, 12);
        assert_eq!(record.resilience_benefit, 12);
        assert_eq!(record.capped_benefit, 7);
        assert_eq!(record.lock_in_index, 8);
        assert_eq!(overall_level(record.lock_in_index), OverallLevel::Low);
    }

    #[test]
    fn scores_stay_in_range_and_respect_the_cap() {
        for answers in all_answer_sets() {
            let record = compute(&answers);
            assert!(record.identity_score <= 15);
            assert!(record.archive_score <= 12);
            assert!(record.workflow_score <= 12);
            assert!(record.resilience_exposure <= 12);
            assert_eq!(record.redundancy_strength, 12 - record.resilience_exposure);
            assert!(record.lock_in_index <= 39);
            assert!(record.lock_in_index >= record.risk_total - record.risk_total / 2);
        }
    }

    #[test]
    fn compute_is_idempotent() {
        let answers = answers_with(|id| if id.index() % 2 == 0 { 0 } else { 3 });
        assert_eq!(compute(&answers), compute(&answers));
    }

    #[test]
    fn raising_one_answer_never_lowers_risk() {
        for question in &questionnaire::QUESTIONS {
            let category = question.id.category();
            for low in question.options {
                for high in question.options.iter().filter(|o| o.points > low.points) {
                    let mut before = answers_with(|id| if id.index() == 2 { 3 } else { 0 });
                    let mut after = before.clone();
                    before.select(question.id, low.label).expect("valid");
                    after.select(question.id, high.label).expect("valid");

                    let (b, a) = (compute(&before), compute(&after));
                    assert!(
                        category_score(&after, category) > category_score(&before, category)
                    );
                    if category == Category::Resilience {
                        assert_eq!(a.risk_total, b.risk_total);
                    } else {
                        assert!(a.risk_total > b.risk_total);
                    }
                    assert!(a.lock_in_index >= b.lock_in_index, "{}", question.id);
                }
            }
        }
    }

    #[test]
    fn unanswered_keys_is_a_set_difference() {
        let mut answers = AnswerSet::new();
        assert_eq!(unanswered_keys(&answers).len(), 17);

        let picked: Vec<QuestionId> = questionnaire::required_ids().step_by(3).collect();
        for id in &picked {
            let label = questionnaire::question(*id).options[0].label;
            answers.select(*id, label).expect("valid");
        }

        let missing = unanswered_keys(&answers);
        assert_eq!(missing.len(), 17 - picked.len());
        assert!(missing.iter().all(|id| !picked.contains(id)));
        assert!(!is_complete(&answers));
        assert!(is_complete(&answers_with(|_| 0)));
    }
}
