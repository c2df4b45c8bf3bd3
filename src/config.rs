use crate::error::{AuditError, Result};
use crate::types::answers::AnswerSet;
use crate::types::config::AuditConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_ANSWERS_FILE: &str = "lockin.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/lockin/config.toml";

/// A validated answers file.
#[derive(Debug, Clone)]
pub struct LoadedAudit {
    pub path: PathBuf,
    pub config: AuditConfig,
    pub answers: AnswerSet,
}

/// `path` may name the answers file or a directory holding `lockin.toml`.
pub fn resolve_answers_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DEFAULT_ANSWERS_FILE)
    } else {
        path.to_path_buf()
    }
}

pub fn load_audit(path: &Path) -> Result<LoadedAudit> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_audit_with_global(path, global.as_deref())
}

pub(crate) fn load_audit_with_global(
    path: &Path,
    global_path: Option<&Path>,
) -> Result<LoadedAudit> {
    let answers_path = resolve_answers_path(path);
    if !answers_path.exists() {
        return Err(AuditError::AnswersNotFound(
            answers_path.display().to_string(),
        ));
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        if let Some(global) = read_global_preferences(path)? {
            merge_toml(&mut merged, global);
        }
    }
    merge_file_if_exists(&mut merged, &answers_path)?;

    let config: AuditConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| AuditError::ConfigParse(e.to_string()))?;
    let answers = AnswerSet::from_raw(&config.answers)?;
    if answers.is_empty() {
        tracing::warn!(path = %answers_path.display(), "no questions answered yet");
    }
    tracing::info!(
        path = %answers_path.display(),
        answered = answers.len(),
        "loaded answers"
    );

    Ok(LoadedAudit {
        path: answers_path,
        config,
        answers,
    })
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config layer absent");
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

/// Global preferences never carry answers; an `[answers]` table there is ignored.
fn read_global_preferences(path: &Path) -> Result<Option<Value>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "global preferences absent");
        return Ok(None);
    }
    let mut value = read_toml_value(path)?;
    if let Value::Table(table) = &mut value {
        if table.remove("answers").is_some() {
            tracing::warn!(
                path = %path.display(),
                "ignoring [answers] in global preferences"
            );
        }
    }
    Ok(Some(value))
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AuditError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
