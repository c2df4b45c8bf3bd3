use crate::types::scoring::ScoreRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub id: &'static str,
    pub text: &'static str,
}

pub const MITIGATION_OPTIONS: [&str; 5] = [
    "Establish a secondary non-Google email for account recovery.",
    "Reduce OAuth reliance for high-impact services.",
    "Export and locally store critical Drive and Photos data.",
    "Use a selective backup strategy (albums / vault folders) to preserve the irreplaceable fast.",
    "Maintain periodic Google Takeout exports.",
];

pub const HELPFUL_LINKS: [(&str, &str); 3] = [
    (
        "Connected third-party apps & services",
        "https://myaccount.google.com/connections",
    ),
    ("Security overview", "https://myaccount.google.com/security"),
    (
        "Google Takeout (export your data)",
        "https://takeout.google.com/",
    ),
];

pub fn structural_observations(record: &ScoreRecord) -> Vec<Observation> {
    let mut observations = Vec::new();
    if record.identity_score >= 10 {
        observations.push(Observation {
            id: "identity.master_node",
            text: "Google operates as a master identity node (email / resets / OAuth / phone verification).",
        });
    }
    if record.archive_score >= 8 {
        observations.push(Observation {
            id: "archive.gravity",
            text: "Archive gravity is high relative to redundancy.",
        });
    }
    if record.workflow_score >= 8 {
        observations.push(Observation {
            id: "workflow.reliance",
            text: "Operational reliance on Google is significant.",
        });
    }
    if record.redundancy_strength <= 4 {
        observations.push(Observation {
            id: "resilience.limited",
            text: "Alternate recovery pathways appear limited.",
        });
    }
    if observations.is_empty() {
        observations.push(Observation {
            id: "distributed",
            text: "No single dimension dominates strongly; centralization appears distributed or mitigated.",
        });
    }
    observations
}
