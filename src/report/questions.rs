use crate::questionnaire;
use crate::types::question::{Category, QuestionId};

pub fn to_questionnaire(with_help: bool) -> String {
    let mut output = String::from("Google Dependency Audit\n");
    output.push_str("Note: when uncertainty is selected, exposure is scored conservatively.\n");

    for (number, category) in Category::ALL.into_iter().enumerate() {
        output.push_str(&format!("\n{}) {}\n", number + 1, category.title()));
        for question in questionnaire::section(category) {
            output.push_str(&format!("\n  [{}] {}\n", question.id, question.prompt));
            for option in question.options {
                output.push_str(&format!("      - {}\n", option.label));
            }
            if let (true, Some(help)) = (with_help, question.help) {
                output.push_str(&format!("      help: {help}\n"));
            }
        }
    }
    output
}

/// One line per unanswered key with its prompt.
pub fn to_missing_list(missing: &[QuestionId]) -> String {
    missing
        .iter()
        .map(|id| format!("{id}: {}\n", questionnaire::question(*id).prompt))
        .collect()
}
