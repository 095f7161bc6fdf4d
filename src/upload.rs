//! Storage for uploaded hotel logos.

use chrono::Utc;
use std::fs;
use std::io;
use std::path::Path;

/// Copy an uploaded file into `dir` and return the generated file name:
/// the upload time in unix milliseconds plus the original extension. Two
/// uploads landing on the same millisecond collide; accepted at this
/// traffic level.
pub fn store_logo(source: &Path, original_name: Option<&str>, dir: &Path) -> io::Result<String> {
    let name = logo_filename(original_name, Utc::now().timestamp_millis());
    fs::create_dir_all(dir)?;
    fs::copy(source, dir.join(&name))?;
    Ok(name)
}

fn logo_filename(original_name: Option<&str>, stamp: i64) -> String {
    match original_name
        .and_then(|n| Path::new(n).extension())
        .and_then(|ext| ext.to_str())
    {
        Some(ext) => format!("{stamp}.{ext}"),
        None => stamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn keeps_the_original_extension() {
        assert_eq!(logo_filename(Some("logo.png"), 1700000000000), "1700000000000.png");
        assert_eq!(logo_filename(Some("logo.svg"), 42), "42.svg");
        assert_eq!(logo_filename(Some("no-extension"), 42), "42");
        assert_eq!(logo_filename(None, 42), "42");
    }

    #[test]
    fn copies_into_the_target_directory() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("incoming.png");
        std::fs::write(&source, b"fake png bytes").unwrap();

        let uploads = dir.path().join("uploads");
        let name = store_logo(&source, Some("logo.png"), &uploads).unwrap();

        assert!(name.ends_with(".png"));
        assert_eq!(std::fs::read(uploads.join(name)).unwrap(), b"fake png bytes");
    }
}
