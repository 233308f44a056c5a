use std::env;
use std::path::PathBuf;

use dirs_next::{cache_dir, home_dir};

/// Environment variable allowing callers to override the TUI log file path.
pub const LOG_PATH_ENV: &str = "WORDSPLIT_LOG_PATH";

/// Default filename for the TUI log.
pub const LOG_FILE_NAME: &str = "tui.log";

pub fn expand_tilde(path: &str) -> PathBuf {
    let p = path.trim();
    if p == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = p.strip_prefix("~/") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    if let Some(rest) = p.strip_prefix("~\\") {
        // Windows-style
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(p)
}

/// Resolves where the TUI writes its log file.
///
/// `WORDSPLIT_LOG_PATH` wins when set and non-empty; otherwise the platform
/// cache directory is used (`~/.cache/wordsplit/tui.log` on Linux).
pub fn default_log_path() -> PathBuf {
    if let Ok(path) = env::var(LOG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordsplit")
        .join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_left_alone() {
        assert_eq!(expand_tilde("  notes/draft.txt "), PathBuf::from("notes/draft.txt"));
    }

    #[test]
    fn tilde_prefix_expands_to_home() {
        let Some(home) = home_dir() else {
            return;
        };
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde("~/logs/tui.log"), home.join("logs/tui.log"));
    }
}
