use serde::Deserialize;
use std::collections::BTreeMap;

/// Parsed answers file layered over the global preferences file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
    pub report: Option<ReportConfig>,
    pub archive: Option<ArchiveConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_guidance")]
    pub guidance: bool,
}

fn default_guidance() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveConfig {
    /// Approximate size of the latest Takeout export. Informational only.
    pub takeout_size_gb: Option<f64>,
}

impl AuditConfig {
    pub fn guidance(&self) -> bool {
        self.report
            .as_ref()
            .map(|report| report.guidance)
            .unwrap_or_else(default_guidance)
    }

    pub fn takeout_size_gb(&self) -> Option<f64> {
        self.archive
            .as_ref()
            .and_then(|archive| archive.takeout_size_gb)
            .filter(|size| size.is_finite() && *size >= 0.0)
    }
}
