//! Output directory preparation, done once before any concept is processed.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Creates `dir` if needed and proves it is writable, so a misconfigured
/// output location fails the run before any network traffic.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    if !dir.is_dir() {
        anyhow::bail!("output path {} is not a directory", dir.display());
    }
    tempfile::Builder::new()
        .prefix(".iconpull-probe")
        .tempfile_in(dir)
        .with_context(|| format!("output directory {} is not writable", dir.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("src").join("assets").join("icons3d");
        prepare_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0, "probe file is removed");
    }

    #[test]
    fn file_in_the_way_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("icons3d");
        fs::write(&file, b"not a dir").unwrap();
        assert!(prepare_output_dir(&file).is_err());
    }
}
