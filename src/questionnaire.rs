//! The fixed questionnaire: 17 questions in four sections.
//!
//! Point tables are editorial judgments. Uncertainty answers on identity
//! questions score as high (or nearly as high) as an affirmative answer, and
//! resilience questions are scored as exposure: the less redundancy, the
//! more points.

use crate::types::question::{AnswerOption, Category, Question, QuestionId};

const fn opt(label: &'static str, points: u32) -> AnswerOption {
    AnswerOption { label, points }
}

const fn id(category: Category, index: u8) -> QuestionId {
    QuestionId::from_parts(category, index)
}

pub static QUESTIONS: [Question; 17] = [
    Question {
        id: id(Category::Identity, 1),
        prompt: "Is your Gmail address your primary email address?",
        options: &[
            opt("Yes, for almost everything", 3),
            opt("Yes, but I also actively use another email", 2),
            opt("No", 0),
        ],
        help: None,
    },
    Question {
        id: id(Category::Identity, 2),
        prompt: "Is this Gmail account used as the password reset email for most of your important accounts?",
        options: &[
            opt("Yes, for most", 3),
            opt("For some", 2),
            opt("No", 0),
            opt("I'm not sure", 3),
        ],
        help: Some(
            "Think of your top 10 accounts (banking, phone, utilities, domain registrar, creator platforms, \
             shopping, identity/credit) and check each account's email / recovery settings. \
             If you're not sure, assume this is a risk: uncertainty often means the Gmail account is a central reset node.",
        ),
    },
    Question {
        id: id(Category::Identity, 3),
        prompt: "Do you use \"Sign in with Google\" for high-impact services?",
        options: &[
            opt("Yes, frequently", 3),
            opt("Occasionally", 2),
            opt("Rarely", 1),
            opt("Never", 0),
            opt("I don't know", 3),
        ],
        help: Some(
            "High-impact examples: banking or financial apps, subscription services, work or creator platforms, \
             domain registrars. Check your connected services at https://myaccount.google.com/connections; \
             if you see 10+ apps listed and don't recognize them all, dependency is likely high.",
        ),
    },
    Question {
        id: id(Category::Identity, 4),
        prompt: "If your Google account were inaccessible tomorrow, would you immediately lose access to services that are difficult to recreate?",
        options: &[
            opt("Yes", 3),
            opt("Possibly", 2),
            opt("No", 0),
            opt("I'm not sure", 3),
        ],
        help: Some(
            "Difficult to recreate: accounts that rely on Gmail for login and reset, OAuth-based accounts, \
             accounts protected by Google Voice or Google Authenticator, long-term archives (email history, photos). \
             If you haven't tested recovery on a few key accounts recently, it's normal to be unsure.",
        ),
    },
    Question {
        id: id(Category::Identity, 5),
        prompt: "Have you used Google Voice as your primary long-term phone number for account verification or important contact?",
        options: &[
            opt("Yes, for years and across many services", 3),
            opt("Yes, for some important services", 2),
            opt("No", 0),
            opt("I'm not sure", 2),
        ],
        help: Some(
            "Review the recovery and 2FA phone numbers for key services. If many accounts list a Google Voice \
             number instead of your carrier number, that's a dependency.",
        ),
    },
    Question {
        id: id(Category::Archive, 1),
        prompt: "Are your primary documents stored in Google Drive?",
        options: &[
            opt("Yes, almost all", 3),
            opt("Yes, but I also store copies elsewhere", 2),
            opt("Some", 1),
            opt("No", 0),
        ],
        help: Some(
            "This refers to the source of truth. If Drive is just a convenience layer and you keep local copies, select lower.",
        ),
    },
    Question {
        id: id(Category::Archive, 2),
        prompt: "Are your photos primarily stored in Google Photos?",
        options: &[
            opt("Yes, exclusively", 3),
            opt("Yes, but I maintain backups", 2),
            opt("Some", 1),
            opt("No", 0),
        ],
        help: Some(
            "Backups mean photos exist somewhere outside Google and are accessible without logging into Google.",
        ),
    },
    Question {
        id: id(Category::Archive, 3),
        prompt: "Is your Gmail archive important to your personal or professional history?",
        options: &[
            opt("Extremely important", 3),
            opt("Somewhat important", 2),
            opt("Not very important", 1),
            opt("Not important", 0),
        ],
        help: Some(
            "If you rely on your inbox for receipts, paperwork trails, work history or long-term memory, \
             your Gmail archive is structurally significant.",
        ),
    },
    Question {
        id: id(Category::Archive, 4),
        prompt: "Do you maintain complete backups of your Google data outside of Google?",
        // Reverse-scored: backups reduce concentration.
        options: &[
            opt("Yes, regularly", 0),
            opt("Yes, occasionally", 1),
            opt("No", 3),
            opt("I'm not sure", 2),
        ],
        help: Some(
            "A true backup exists on local or offline storage, is accessible without logging into Google, \
             and is updated at least yearly. If your only copy is inside Google, that is NOT a backup.",
        ),
    },
    Question {
        id: id(Category::Workflow, 1),
        prompt: "Is Google Calendar your primary scheduling system?",
        options: &[opt("Yes", 3), opt("Partially", 2), opt("No", 0)],
        help: Some(
            "If it's mirrored elsewhere or you use another calendar in parallel, choose Partially.",
        ),
    },
    Question {
        id: id(Category::Workflow, 2),
        prompt: "Do you use Google Docs / Sheets / Workspace for professional or collaborative work?",
        options: &[
            opt("Yes, extensively", 3),
            opt("Occasionally", 2),
            opt("Rarely", 1),
            opt("Never", 0),
        ],
        help: None,
    },
    Question {
        id: id(Category::Workflow, 3),
        prompt: "Do you rely on Google services for active projects or business operations?",
        options: &[opt("Yes", 3), opt("Somewhat", 2), opt("No", 0)],
        help: Some(
            "Examples: Drive-based project files, Gmail as a business inbox, Calendar for operations, \
             Sheets for tracking.",
        ),
    },
    Question {
        id: id(Category::Workflow, 4),
        prompt: "If access to Google services were lost for 7 days, would it significantly disrupt your work or routines?",
        options: &[
            opt("Yes", 3),
            opt("Some disruption", 2),
            opt("Minimal disruption", 1),
            opt("No", 0),
        ],
        help: None,
    },
    Question {
        id: id(Category::Resilience, 1),
        prompt: "Do you actively use a secondary non-Google email provider?",
        options: &[
            opt("Yes, regularly", 0),
            opt("Yes, but rarely", 1),
            opt("No", 3),
        ],
        help: Some(
            "It should be an email you can access independently and that is actually used, not just created and forgotten.",
        ),
    },
    Question {
        id: id(Category::Resilience, 2),
        prompt: "Do you maintain local backups of important Google Drive or Photos data?",
        options: &[
            opt("Yes, comprehensive backups", 0),
            opt("Partial backups", 1),
            opt("No", 3),
            opt("I'm not sure", 2),
        ],
        help: Some(
            "Local backup means copies exist on your computer or external storage.",
        ),
    },
    Question {
        id: id(Category::Resilience, 3),
        prompt: "Have you exported your data using Google Takeout within the past year?",
        options: &[
            opt("Yes", 0),
            opt("More than a year ago", 1),
            opt("Never", 3),
            opt("I'm not sure what that is", 2),
        ],
        help: Some(
            "Google Takeout exports Gmail, Drive, Photos, Calendar and more. Start here: https://takeout.google.com/",
        ),
    },
    Question {
        id: id(Category::Resilience, 4),
        prompt: "Do you use a custom domain email (not tied to Gmail infrastructure)?",
        options: &[opt("Yes", 0), opt("No", 2), opt("I'm not sure", 1)],
        help: Some(
            "A custom domain (you@yourdomain.com) lets you move providers without changing your address.",
        ),
    },
];

/// Every question key, in presentation order.
pub fn required_ids() -> impl Iterator<Item = QuestionId> {
    QUESTIONS.iter().map(|question| question.id)
}

/// Table entry for `id`. Sections are stored contiguously in
/// `Category::ALL` order, so the slot is the section offset plus the index.
pub fn question(id: QuestionId) -> &'static Question {
    let offset: usize = Category::ALL
        .iter()
        .take_while(|category| **category != id.category())
        .map(|category| category.question_count())
        .sum();
    &QUESTIONS[offset + id.index() - 1]
}

pub fn find(category: Category, index: usize) -> Option<&'static Question> {
    QuestionId::new(category, index).map(question)
}

pub fn section(category: Category) -> impl Iterator<Item = &'static Question> {
    QUESTIONS
        .iter()
        .filter(move |question| question.id.category() == category)
}
