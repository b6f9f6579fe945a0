use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::reflow::{DEFAULT_MAX_WIDTH, WrapOptions};

/// Options that can be given on the command line or saved in an rc file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub width: Option<usize>,
    pub perf: bool,
}

impl ConfigFlags {
    /// Merge `other` over `self`: values from `other` win, booleans combine.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            width: other.width.or(self.width),
            perf: self.perf || other.perf,
        }
    }

    pub fn max_width(&self) -> usize {
        self.width.unwrap_or(DEFAULT_MAX_WIDTH)
    }

    pub fn wrap_options(&self) -> WrapOptions {
        WrapOptions::with_max_width(self.max_width())
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("rewrap").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("rewrap")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("rewrap").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("rewrap").join("config");
        }
    }

    PathBuf::from(".rewraprc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".rewraprc")
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
    let mut lines = vec!["# rewrap defaults (saved with --save)".to_string()];
    if let Some(width) = flags.width {
        lines.push(format!("--width {width}"));
    }
    if flags.perf {
        lines.push("--perf".to_string());
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

/// Pick the saveable flags out of raw command-line tokens.
///
/// Unknown tokens and malformed values are skipped, so the full argument
/// list can be passed in.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--perf" {
            flags.perf = true;
        } else if token == "--width" || token == "-w" {
            if let Some(next) = tokens.get(i + 1) {
                flags.width = next.parse().ok().or(flags.width);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--width=") {
            flags.width = value.parse().ok().or(flags.width);
        }
        i += 1;
    }
    flags
}
