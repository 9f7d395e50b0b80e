use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::SystemTime;

pub(crate) const DEBUG_LOG_ENV_VAR: &str = "WINDOW_PLACER_DEBUG_LOG";
pub(crate) const DEFAULT_DEBUG_LOG_FILE_NAME: &str = "window-placer-debug.log";
pub(crate) const FALLBACK_DEBUG_LOG_FILE_NAME: &str = "window-placer-debug.fallback.log";

static DEBUG_LOGGER: OnceLock<Mutex<std::fs::File>> = OnceLock::new();

/// `--debug-log` beats the environment variable, which beats the temp dir default.
fn resolve_debug_log_path(path_override: &Option<String>, env_path: Option<String>) -> PathBuf {
    path_override
        .clone()
        .or(env_path)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DEBUG_LOG_FILE_NAME))
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)
}

fn open_with_fallback(
    chosen: PathBuf,
    fallback: PathBuf,
) -> Result<(PathBuf, std::fs::File), Box<dyn std::error::Error>> {
    match open_log_file(&chosen) {
        Ok(f) => Ok((chosen, f)),
        Err(e) => {
            eprintln!(
                "WindowPlacer: Failed to open debug log at {} ({}), falling back to {}",
                chosen.display(),
                e,
                fallback.display()
            );
            let f = open_log_file(&fallback)?;
            Ok((fallback, f))
        }
    }
}

pub(crate) fn init_debug_logging(
    enabled: bool,
    path_override: &Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !enabled {
        return Ok(());
    }
    let chosen = resolve_debug_log_path(path_override, std::env::var(DEBUG_LOG_ENV_VAR).ok());
    let (path, file) = open_with_fallback(
        chosen,
        std::env::temp_dir().join(FALLBACK_DEBUG_LOG_FILE_NAME),
    )?;

    let _ = DEBUG_LOGGER.set(Mutex::new(file));
    println!("WindowPlacer: Debug log enabled at {}", path.display());
    debug_log_line("debug logging initialized");
    Ok(())
}

pub(crate) fn debug_log_line(message: &str) {
    let Some(lock) = DEBUG_LOGGER.get() else {
        return;
    };
    let ts_ms = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    if let Ok(mut file) = lock.lock() {
        let _ = writeln!(file, "[{}] {}", ts_ms, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_path_wins_over_env_and_default() {
        let path = resolve_debug_log_path(
            &Some("/some/where/log.txt".to_string()),
            Some("/from/env.log".to_string()),
        );
        assert_eq!(path, PathBuf::from("/some/where/log.txt"));
    }

    #[test]
    fn env_path_wins_over_default() {
        let path = resolve_debug_log_path(&None, Some("/from/env.log".to_string()));
        assert_eq!(path, PathBuf::from("/from/env.log"));
    }

    #[test]
    fn default_path_lives_in_temp_dir() {
        let path = resolve_debug_log_path(&None, None);
        assert_eq!(path, std::env::temp_dir().join(DEFAULT_DEBUG_LOG_FILE_NAME));
    }

    #[test]
    fn unopenable_path_falls_back() {
        let dir = tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").expect("write blocker");
        let fallback = dir.path().join("fallback.log");

        let (path, _file) =
            open_with_fallback(blocker.join("debug.log"), fallback.clone()).expect("fallback");

        assert_eq!(path, fallback);
        assert!(fallback.exists());
    }

    #[test]
    fn openable_path_is_used_and_parents_created() {
        let dir = tempdir().expect("tempdir");
        let chosen = dir.path().join("nested").join("debug.log");

        let (path, _file) =
            open_with_fallback(chosen.clone(), dir.path().join("fallback.log")).expect("open");

        assert_eq!(path, chosen);
        assert!(chosen.exists());
        assert!(!dir.path().join("fallback.log").exists());
    }
}
