use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub const IN_MEMORY: &str = ":memory:";

pub fn conn(database_url: &str) -> Result<Connection> {
    let conn = if database_url == IN_MEMORY {
        Connection::open_in_memory()?
    } else {
        ensure_parent_dir(Path::new(database_url))?;
        Connection::open(database_url)
            .with_context(|| format!("failed to open database at {database_url}"))?
    };

    crate::database::create_draws_table(&conn)?;

    Ok(conn)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::count_draws;

    #[test]
    fn in_memory_connection_has_draws_table() {
        let conn = conn(IN_MEMORY).unwrap();
        assert_eq!(count_draws(&conn).unwrap(), 0);
    }

    #[test]
    fn file_connection_creates_parent_directory() {
        let dir = std::env::temp_dir().join(format!("lotto-draws-{}", std::process::id()));
        let path = dir.join("nested").join("lotto.db");
        let _ = fs::remove_dir_all(&dir);

        let conn = conn(path.to_str().unwrap()).unwrap();
        assert_eq!(count_draws(&conn).unwrap(), 0);
        assert!(path.exists());

        drop(conn);
        let _ = fs::remove_dir_all(&dir);
    }
}
