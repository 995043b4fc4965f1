//! Environment/runtime helpers
//!
//! Sanity checks run before the database connection is opened.

use std::path::Path;

use tracing::{info, warn};

/// For file-backed SQLite URLs, make sure the parent directory exists so the
/// driver can create the database file. Other URLs are left untouched.
pub async fn ensure_database_dir(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(database_url) else {
        return Ok(());
    };
    let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(parent).await.is_err() {
        warn!(dir = %parent.display(), "database directory missing; creating it");
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    } else {
        info!(dir = %parent.display(), "database directory present");
    }
    Ok(())
}

/// Extract the file path from a `sqlite:` URL, ignoring in-memory databases
/// and query parameters such as `?mode=rwc`.
pub fn sqlite_file_path(database_url: &str) -> Option<&str> {
    let rest = database_url.strip_prefix("sqlite:")?;
    let rest = rest.trim_start_matches("//");
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(path)
}
