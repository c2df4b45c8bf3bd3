use crate::error::{AuditError, Result};
use crate::questionnaire;
use crate::types::question::Category;
use chrono::Utc;
use std::fs;
use std::path::Path;

/// Empty answers file: every key present with a blank value and its
/// permitted labels listed in a comment above it.
pub fn render_template() -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# Google dependency audit answers (lockin v{}, generated {})\n",
        env!("CARGO_PKG_VERSION"),
        Utc::now().format("%Y-%m-%d")
    ));
    output.push_str("# Fill in one of the listed labels for each question.\n");
    output.push_str("# When uncertainty is selected, exposure is scored conservatively.\n\n");
    output.push_str("[answers]\n");

    for category in Category::ALL {
        output.push_str(&format!("\n# --- {} ---\n", category.title()));
        for question in questionnaire::section(category) {
            output.push_str(&format!("\n# {}\n", question.prompt));
            output.push_str(&format!("#   options: {}\n", question.labels().join(" | ")));
            output.push_str(&format!("{} = \"\"\n", question.id));
        }
    }

    output.push_str("\n[report]\nguidance = true\n");
    output.push_str(
        "\n[archive]\n# Approximate total size of your latest Takeout export (GB); not scored.\n\
         # takeout_size_gb = 0.0\n",
    );
    output
}

pub enum WriteOutcome {
    Written,
    DryRun(String),
}

pub fn write_template(path: &Path, dry_run: bool, no_overwrite: bool) -> Result<WriteOutcome> {
    let exists = path.exists();
    if exists && no_overwrite {
        return Err(AuditError::AlreadyExists(path.display().to_string()));
    }

    let content = render_template();
    if dry_run {
        return Ok(WriteOutcome::DryRun(content));
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(AuditError::Io)?;
    }
    fs::write(path, content).map_err(AuditError::Io)?;
    if exists {
        tracing::info!(path = %path.display(), "answers reset");
    } else {
        tracing::info!(path = %path.display(), "answers template written");
    }
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::answers::AnswerSet;
    use crate::types::config::AuditConfig;
    use tempfile::TempDir;

    #[test]
    fn template_lists_every_key_and_parses_as_unanswered() {
        let content = render_template();
        for id in questionnaire::required_ids() {
            assert!(content.contains(&format!("{id} = \"\"")), "missing {id}");
        }

        let cfg: AuditConfig = toml::from_str(&content).expect("template should parse");
        assert_eq!(cfg.answers.len(), 17);
        let answers = AnswerSet::from_raw(&cfg.answers).expect("blank answers validate");
        assert!(answers.is_empty());
        assert!(cfg.guidance());
    }

    #[test]
    fn write_template_respects_no_overwrite() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("lockin.toml");
        fs::write(&path, "[answers]\nid_q1 = \"No\"\n").expect("file should write");

        let err = write_template(&path, false, true).err();
        assert!(matches!(err, Some(AuditError::AlreadyExists(_))));
        let kept = fs::read_to_string(&path).expect("file should read");
        assert!(kept.contains("\"No\""));
    }

    #[test]
    fn write_template_resets_existing_answers() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("nested/lockin.toml");
        write_template(&path, false, false).expect("first write succeeds");
        fs::write(&path, "[answers]\nid_q1 = \"No\"\n").expect("file should write");

        write_template(&path, false, false).expect("reset succeeds");
        let reset = fs::read_to_string(&path).expect("file should read");
        assert!(reset.contains("id_q1 = \"\""));
    }

    #[test]
    fn dry_run_leaves_disk_untouched() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("lockin.toml");

        let outcome = write_template(&path, true, false).expect("dry run succeeds");
        assert!(matches!(outcome, WriteOutcome::DryRun(content) if content.contains("[answers]")));
        assert!(!path.exists());
    }
}
