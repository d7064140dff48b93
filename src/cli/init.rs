//! `taskflow init`：写入默认配置文件

use std::path::Path;

use crate::error::Result;
use crate::storage::config;

pub fn execute(path: &Path, force: bool) -> Result<()> {
    config::init_config(path, force)?;
    tracing::info!(path = %path.display(), "config initialized");
    println!("Wrote default config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_execute_creates_then_refuses() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        execute(&path, false).unwrap();
        assert!(path.exists());
        assert!(execute(&path, false).is_err());
        assert!(execute(&path, true).is_ok());
    }
}
