use crate::scoring::{self, level_for};
use crate::types::answers::AnswerSet;
use crate::types::question::Category;
use crate::types::scoring::{Score, CATEGORY_MAX};

const BAR_WIDTH: usize = 20;

/// Live view while answering: status plus one meter per dimension. The
/// composite index stays hidden until the final report.
pub fn to_meters(answers: &AnswerSet) -> String {
    let record = scoring::compute(answers);
    let missing = scoring::unanswered_keys(answers);

    let mut output = String::from("Live Meters\n\n");
    if missing.is_empty() {
        output.push_str("Status: Complete — ready for the final report\n\n");
    } else {
        output.push_str(&format!(
            "Status: Incomplete — {} unanswered (meters update as you answer)\n\n",
            missing.len()
        ));
    }

    let rows = [
        (Category::Identity, record.identity_score, record.identity_max),
        (Category::Archive, record.archive_score, record.archive_max),
        (Category::Workflow, record.workflow_score, record.workflow_max),
        (Category::Resilience, record.redundancy_strength, CATEGORY_MAX),
    ];
    for (category, score, max) in rows {
        output.push_str(&meter(category.title(), score, max));
        output.push('\n');
    }

    output.push_str("\nLock-In Index: hidden until the final report\n");
    output
}

pub fn meter(label: &str, score: Score, max_score: Score) -> String {
    let pct = percent(score, max_score);
    let filled = (pct as usize * BAR_WIDTH) / 100;
    format!(
        "{label:<24} {:<9} {score:>2}/{max_score:<2} [{}{}] {pct:>3}%",
        level_for(score, max_score).as_str(),
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
    )
}

fn percent(score: Score, max_score: Score) -> u32 {
    if max_score == 0 {
        0
    } else {
        (score.min(max_score) * 100) / max_score
    }
}
