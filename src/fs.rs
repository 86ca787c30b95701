//! File system utilities.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file lives next to the target so the rename stays on one
/// filesystem. A download interrupted halfway never leaves a truncated
/// bundle behind.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)?;

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    Ok(())
}

/// Expands a comma-separated list of paths and glob patterns.
///
/// Matches are returned in pattern order, each pattern's matches sorted
/// alphabetically, without duplicates.
pub fn expand_masks(masks: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for mask in masks.split(',').map(str::trim).filter(|m| !m.is_empty()) {
        let entries =
            glob::glob(mask).with_context(|| format!("Invalid file pattern: '{mask}'"))?;

        let mut matched: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .filter(|path| path.is_file())
            .collect();
        matched.sort();

        for path in matched {
            if !files.contains(&path) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// Extracts an export bundle below `dest`, keeping the paths stored in the
/// archive and creating directories as needed.
///
/// Returns the extracted files in archive order. Entries that would land
/// outside `dest` fail the whole extraction.
pub fn unzip(archive: &Path, dest: &Path) -> Result<Vec<PathBuf>> {
    let file = fs::File::open(archive)
        .with_context(|| format!("Failed to open bundle: {}", archive.display()))?;
    let mut zip = zip::ZipArchive::new(file)
        .with_context(|| format!("Not a zip archive: {}", archive.display()))?;

    let mut files = Vec::new();
    for index in 0..zip.len() {
        let mut entry = zip
            .by_index(index)
            .with_context(|| format!("Failed to read entry {index} of {}", archive.display()))?;
        let Some(relative) = entry.enclosed_name() else {
            bail!("Refusing to extract '{}' outside {}", entry.name(), dest.display());
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory: {}", target.display()))?;
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let mut out = fs::File::create(&target)
            .with_context(|| format!("Failed to create file: {}", target.display()))?;
        io::copy(&mut entry, &mut out)
            .with_context(|| format!("Failed to extract: {}", target.display()))?;
        files.push(target);
    }

    Ok(files)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_bundle(path: &Path) {
        let mut writer = zip::ZipWriter::new(fs::File::create(path).unwrap());
        let options = zip::write::SimpleFileOptions::default();
        writer.add_directory("locale/", options).unwrap();
        writer.start_file("locale/en.json", options).unwrap();
        writer.write_all(br#"{"hello":"Hello"}"#).unwrap();
        writer.start_file("ios/fr.lproj/Localizable.strings", options).unwrap();
        writer.write_all(b"\"hello\" = \"Bonjour\";").unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bundle.zip");

        atomic_write(&file_path, b"PK\x03\x04").unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), b"PK\x03\x04");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bundle.zip");

        fs::write(&file_path, "Original content").unwrap();
        atomic_write(&file_path, b"New content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "New content");
    }

    #[test]
    fn test_atomic_write_no_temp_file_remains() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bundle.zip");

        atomic_write(&file_path, b"content").unwrap();

        assert!(!temp_dir.path().join(".bundle.zip.tmp").exists());
    }

    #[test]
    fn test_atomic_write_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing").join("bundle.zip");

        assert!(atomic_write(&file_path, b"content").is_err());
    }

    #[test]
    fn test_expand_masks_globs_and_dedups() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.json", "a.json", "notes.txt"] {
            fs::write(temp_dir.path().join(name), "{}").unwrap();
        }
        let dir = temp_dir.path().display();

        let files = expand_masks(&format!("{dir}/*.json, {dir}/a.json,{dir}/notes.txt")).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json", "notes.txt"]);
    }

    #[test]
    fn test_expand_masks_no_match_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mask = format!("{}/*.po", temp_dir.path().display());
        assert!(expand_masks(&mask).unwrap().is_empty());
    }

    #[test]
    fn test_unzip_keeps_relative_paths() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("bundle.zip");
        write_bundle(&archive);
        let dest = temp_dir.path().join("out");

        let files = unzip(&archive, &dest).unwrap();

        assert_eq!(
            files,
            vec![
                dest.join("locale/en.json"),
                dest.join("ios/fr.lproj/Localizable.strings"),
            ]
        );
        assert_eq!(
            fs::read_to_string(dest.join("locale/en.json")).unwrap(),
            r#"{"hello":"Hello"}"#
        );
        assert!(dest.join("ios/fr.lproj").is_dir());
        assert!(archive.exists());
    }

    #[test]
    fn test_unzip_rejects_non_archive() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("bundle.zip");
        fs::write(&archive, b"PK\x03\x04bundle").unwrap();

        let err = unzip(&archive, temp_dir.path()).unwrap_err();

        assert!(err.to_string().contains("Not a zip archive"));
    }

    #[test]
    fn test_expand_masks_invalid_pattern() {
        let result = expand_masks("locale/[.json");
        assert!(result.unwrap_err().to_string().contains("Invalid file pattern"));
    }
}
