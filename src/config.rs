use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::editor::RedoPolicy;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub quiet: bool,
    pub redo_policy: Option<RedoPolicy>,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            quiet: self.quiet || other.quiet,
            redo_policy: other.redo_policy.or(self.redo_policy),
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("jotter").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("jotter")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("jotter").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("jotter").join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".jotterrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# jotter defaults (saved with --save)".to_string()];
    if flags.quiet {
        lines.push("--quiet".to_string());
    }
    if let Some(name) = flags
        .redo_policy
        .and_then(|policy| policy.to_possible_value())
    {
        lines.push(format!("--redo-policy {}", name.get_name()));
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick out the flags we persist from a raw argument list.
///
/// Unknown tokens are skipped so the full `argv` can be passed in.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--quiet" || token == "-q" {
            flags.quiet = true;
        } else if token == "--redo-policy" {
            if let Some(next) = tokens.get(i + 1) {
                flags.redo_policy = parse_policy(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--redo-policy=") {
            flags.redo_policy = parse_policy(value);
        } else if token == "--debug-log" {
            if let Some(next) = tokens.get(i + 1) {
                flags.debug_log = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--debug-log=") {
            flags.debug_log = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

fn parse_policy(s: &str) -> Option<RedoPolicy> {
    RedoPolicy::from_str(s, true).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "jotter".to_string(),
            "--quiet".to_string(),
            "--redo-policy".to_string(),
            "keep".to_string(),
            "--debug-log=edit.log".to_string(),
            "--save".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.quiet);
        assert_eq!(flags.redo_policy, Some(RedoPolicy::Keep));
        assert_eq!(flags.debug_log, Some(PathBuf::from("edit.log")));
    }

    #[test]
    fn test_policy_names_round_trip_case_insensitively() {
        let args = vec!["--redo-policy".to_string(), "KEEP".to_string()];
        assert_eq!(parse_flag_tokens(&args).redo_policy, Some(RedoPolicy::Keep));

        let dir = tempdir().unwrap();
        let path = dir.path().join("config");
        let flags = ConfigFlags {
            redo_policy: Some(RedoPolicy::Clear),
            ..ConfigFlags::default()
        };
        save_config_flags(&path, &flags).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("--redo-policy clear"));
    }

    #[test]
    fn test_unknown_policy_is_ignored() {
        let args = vec!["--redo-policy=sometimes".to_string()];
        assert_eq!(parse_flag_tokens(&args).redo_policy, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            quiet: true,
            redo_policy: Some(RedoPolicy::Keep),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            redo_policy: Some(RedoPolicy::Clear),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.quiet);
        assert_eq!(merged.redo_policy, Some(RedoPolicy::Clear));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let flags = ConfigFlags {
            quiet: true,
            redo_policy: Some(RedoPolicy::Keep),
            debug_log: Some(PathBuf::from("edit.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_config_loads_defaults() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}
