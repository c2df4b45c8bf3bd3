use crate::report::guidance::{ACCURATE_ANSWERS, CONNECTIONS_TIP, SELECTIVE_BACKUP};
use crate::report::AuditReport;
use crate::scoring::observations::{HELPFUL_LINKS, MITIGATION_OPTIONS};

const INTRO: &str = "This audit evaluates how structurally centralized your digital identity and data are \
around a single Google account. It does not measure trust or privacy posture. It measures infrastructure \
concentration.";

const DIMENSIONS: [(&str, &str); 4] = [
    (
        "Identity Centralization",
        "Your Google account functions as a primary identity authority. This can include email, \
         password resets, OAuth login, and phone verification (e.g., Google Voice).",
    ),
    (
        "Archive Concentration",
        "A significant portion of your documents, photos, or email history resides within Google \
         systems. Recovery depends on exports and active backups.",
    ),
    (
        "Workflow Reliance",
        "Some daily operations are connected to Google services. A temporary loss of access can \
         affect scheduling, collaboration, and project continuity.",
    ),
    (
        "Resilience / Redundancy",
        "Resilience reflects whether alternate pathways exist (secondary email, exports, backups, \
         portability). Higher resilience reduces single-point exposure.",
    ),
];

pub fn to_markdown(report: &AuditReport) -> String {
    let mut output = String::new();
    output.push_str("# Google Dependency Profile\n\n");
    output.push_str(INTRO);
    output.push_str("\n\n");

    output.push_str("## Dimension Breakdown\n\n");
    let levels = [
        report.levels.identity,
        report.levels.archive,
        report.levels.workflow,
        report.levels.redundancy,
    ];
    for ((title, body), level) in DIMENSIONS.iter().zip(levels) {
        output.push_str(&format!("**{title} — {level}**\n\n{body}\n\n"));
    }

    output.push_str("## Lock-In Index\n\n");
    output.push_str(&format!(
        "**Overall Centralization Level: {}**\n\n",
        report.overall_level
    ));
    output.push_str(&format!(
        "Lock-In Index: {} (identity + archive + workflow, mitigated by resilience; mitigation capped).\n\n",
        report.scores.lock_in_index
    ));

    output.push_str("## Structural Observations\n\n");
    for observation in &report.observations {
        output.push_str(&format!("- {}\n", observation.text));
    }
    output.push('\n');

    output.push_str("## Strategic Mitigation Options\n\n");
    output.push_str(
        "Reducing centralization does not require abandoning Google. Structural shifts can be incremental:\n\n",
    );
    for option in MITIGATION_OPTIONS {
        output.push_str(&format!("- {option}\n"));
    }
    output.push('\n');

    if let Some(size) = report.takeout_size_gb {
        output.push_str("## Archive Gravity\n\n");
        output.push_str(&format!(
            "Latest Takeout export: ~{size:.1} GB (recorded for visibility; not scored).\n\n"
        ));
    }

    if report.guidance {
        output.push_str("## Helpful Links\n\n");
        for (label, url) in HELPFUL_LINKS {
            output.push_str(&format!("- {label}: {url}\n"));
        }
        output.push('\n');
        output.push_str(CONNECTIONS_TIP);
        output.push_str("\n\n");

        output.push_str("## How to Find Accurate Answers (Step-by-Step)\n\n");
        output.push_str(ACCURATE_ANSWERS);
        output.push('\n');

        output.push_str("## Selective Backup Strategy (Recommended)\n\n");
        output.push_str(SELECTIVE_BACKUP);
        output.push('\n');
    }

    output.push_str(
        "_This report is a snapshot of your current configuration. It's designed to make structure visible._\n",
    );
    output
}
