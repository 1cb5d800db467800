use crate::db;
use crate::error::{Result, StoreError};
use crate::paths;
use rusqlite::backup::Backup;
use rusqlite::{Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const PAGES_PER_STEP: i32 = 200;
const PAUSE_BETWEEN_STEPS: Duration = Duration::from_millis(25);
const SIDECAR_SUFFIXES: [&str; 3] = ["-wal", "-shm", "-journal"];

/// Copies the live database to `path` with SQLite's online backup API and
/// returns the size of the written file.
pub fn backup_to(conn: &Connection, path: &Path) -> Result<u64> {
    paths::ensure_parent_dir(path)?;
    let target = absolute_target(path)?;
    if let Some(live) = live_db_file(conn)? {
        if clobbers_live_db(&target, &absolute_target(&live)?)? {
            return Err(StoreError::InvalidBackupPath(path.to_path_buf()));
        }
    }

    let mut dest = Connection::open(&target)?;
    Backup::new(conn, &mut dest)?.run_to_completion(PAGES_PER_STEP, PAUSE_BETWEEN_STEPS, None)?;
    drop(dest);
    db::restrict_db_permissions(&target)?;
    Ok(fs::metadata(&target)?.len())
}

fn absolute_target(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(fs::canonicalize(path)?);
    }
    let file_name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidBackupPath(path.to_path_buf()))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok(fs::canonicalize(parent)?.join(file_name))
}

fn live_db_file(conn: &Connection) -> Result<Option<PathBuf>> {
    let file: Option<String> = conn
        .query_row(
            "SELECT file FROM pragma_database_list WHERE name = 'main';",
            [],
            |row| row.get(0),
        )
        .optional()?;
    Ok(file.filter(|f| !f.is_empty()).map(PathBuf::from))
}

fn clobbers_live_db(target: &Path, live: &Path) -> Result<bool> {
    if target == live {
        return Ok(true);
    }
    for suffix in SIDECAR_SUFFIXES {
        let mut sidecar = live.as_os_str().to_owned();
        sidecar.push(suffix);
        if target == Path::new(&sidecar) {
            return Ok(true);
        }
    }
    same_inode(target, live)
}

#[cfg(unix)]
fn same_inode(target: &Path, live: &Path) -> Result<bool> {
    use std::os::unix::fs::MetadataExt;
    if !target.exists() || !live.exists() {
        return Ok(false);
    }
    let a = fs::metadata(target)?;
    let b = fs::metadata(live)?;
    Ok(a.dev() == b.dev() && a.ino() == b.ino())
}

#[cfg(not(unix))]
fn same_inode(_target: &Path, _live: &Path) -> Result<bool> {
    Ok(false)
}
