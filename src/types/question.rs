use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Identity,
    Archive,
    Workflow,
    Resilience,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Identity,
        Category::Archive,
        Category::Workflow,
        Category::Resilience,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Identity => "id",
            Self::Archive => "ar",
            Self::Workflow => "wf",
            Self::Resilience => "re",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Identity => "Identity Centralization",
            Self::Archive => "Archive Concentration",
            Self::Workflow => "Workflow Reliance",
            Self::Resilience => "Resilience / Redundancy",
        }
    }

    pub fn question_count(self) -> usize {
        match self {
            Self::Identity => 5,
            Self::Archive | Self::Workflow | Self::Resilience => 4,
        }
    }

    /// Nominal maximum: three points per question.
    pub fn max_score(self) -> u32 {
        self.question_count() as u32 * 3
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Enumerated key of one questionnaire item, e.g. `id_q3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionId {
    category: Category,
    index: u8,
}

impl QuestionId {
    /// `index` is 1-based, matching the key suffix.
    pub fn new(category: Category, index: usize) -> Option<Self> {
        if (1..=category.question_count()).contains(&index) {
            Some(Self {
                category,
                index: index as u8,
            })
        } else {
            None
        }
    }

    pub(crate) const fn from_parts(category: Category, index: u8) -> Self {
        Self { category, index }
    }

    pub fn category(self) -> Category {
        self.category
    }

    pub fn index(self) -> usize {
        self.index as usize
    }

    pub fn key(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_q{}", self.category.prefix(), self.index)
    }
}

impl FromStr for QuestionId {
    type Err = ();

    /// Accepts only the canonical key: no padding, sign or leading zeros.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, rest) = s.split_once("_q").ok_or(())?;
        let category = Category::ALL
            .into_iter()
            .find(|category| category.prefix() == prefix)
            .ok_or(())?;
        let index: usize = rest.parse().map_err(|_| ())?;
        let id = QuestionId::new(category, index).ok_or(())?;
        if id.key() == s {
            Ok(id)
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: &'static str,
    pub points: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
    pub help: Option<&'static str>,
}

impl Question {
    /// Index of the option whose label matches `label`.
    ///
    /// Matching ignores surrounding whitespace, ASCII case and the
    /// typographic apostrophe so `"i’m NOT sure "` selects `"I'm not sure"`.
    pub fn option_index(&self, label: &str) -> Option<usize> {
        let wanted = normalize_label(label);
        self.options
            .iter()
            .position(|option| normalize_label(option.label) == wanted)
    }

    /// Points for a raw label; absent or unrecognised labels score 0.
    pub fn points_for(&self, label: Option<&str>) -> u32 {
        label
            .and_then(|label| self.option_index(label))
            .map(|index| self.options[index].points)
            .unwrap_or(0)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.options.iter().map(|option| option.label).collect()
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().replace('\u{2019}', "'").to_ascii_lowercase()
}
