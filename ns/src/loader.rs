//! Template content loading

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::SeedError;

/// Read `dir/filename` as a template.
///
/// Returns the text only when the path is a regular file whose content is not
/// blank. Any failure along the way (permissions, invalid UTF-8, I/O) counts
/// as no template.
pub fn load_template(dir: &Path, filename: &str) -> Option<String> {
    debug!(dir = %dir.display(), %filename, "load_template: called");
    match read_template(dir, filename) {
        Ok(content) => content,
        Err(e) => {
            debug!(error = %e, "load_template: unreadable template, treating as absent");
            None
        }
    }
}

fn read_template(dir: &Path, filename: &str) -> Result<Option<String>, SeedError> {
    let path = dir.join(filename);

    let metadata = match fs::metadata(&path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "read_template: no such file");
            return Ok(None);
        }
        Err(source) => return Err(SeedError::Read { path, source }),
    };

    if !metadata.is_file() {
        debug!(path = %path.display(), "read_template: not a regular file");
        return Ok(None);
    }

    let content = fs::read_to_string(&path).map_err(|source| SeedError::Read {
        path: path.clone(),
        source,
    })?;

    if content.trim().is_empty() {
        debug!(path = %path.display(), "read_template: blank template");
        return Ok(None);
    }

    debug!(path = %path.display(), bytes = content.len(), "read_template: loaded");
    Ok(Some(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_loads_content_untrimmed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("AGENTS.md"), "\n# Agents\n\nBe helpful.\n").unwrap();

        let content = load_template(temp.path(), "AGENTS.md");
        assert_eq!(content.as_deref(), Some("\n# Agents\n\nBe helpful.\n"));
    }

    #[test]
    fn test_missing_file_is_absent() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_template(temp.path(), "SOUL.md"), None);
    }

    #[test]
    fn test_whitespace_only_is_absent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("USER.md"), "  \n\t\n").unwrap();
        assert_eq!(load_template(temp.path(), "USER.md"), None);
    }

    #[test]
    fn test_empty_file_is_absent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("TOOLS.md"), "").unwrap();
        assert_eq!(load_template(temp.path(), "TOOLS.md"), None);
    }

    #[test]
    fn test_directory_is_absent() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("IDENTITY.md")).unwrap();
        assert_eq!(load_template(temp.path(), "IDENTITY.md"), None);
    }

    #[test]
    fn test_invalid_utf8_is_absent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("HEARTBEAT.md"), [0xff, 0xfe, 0x00, 0x41]).unwrap();
        assert_eq!(load_template(temp.path(), "HEARTBEAT.md"), None);
    }

    #[test]
    fn test_missing_template_dir_is_absent() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_template(&temp.path().join("gone"), "AGENTS.md"), None);
    }

    #[test]
    fn test_read_error_is_reported_internally() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("AGENTS.md"), [0xc3, 0x28]).unwrap();

        let result = read_template(temp.path(), "AGENTS.md");
        assert!(matches!(result, Err(SeedError::Read { .. })));
    }
}
