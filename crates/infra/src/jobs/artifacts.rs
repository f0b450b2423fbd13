//! Artifact persistence

use std::fs::File;
use std::io::Write;
use std::path::Path;

use saucerest_domain::Result;
use tracing::info;

use crate::errors::InfraError;

/// Write `body` followed by a line terminator to `path`, replacing any file
/// already there.
pub fn write_artifact(path: &Path, body: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(InfraError::from)?;
    file.write_all(body).map_err(InfraError::from)?;
    file.write_all(b"\n").map_err(InfraError::from)?;
    file.flush().map_err(InfraError::from)?;

    info!(path = %path.display(), bytes = body.len(), "saved job artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use saucerest_domain::SauceRestError;

    use super::*;

    #[test]
    fn writes_body_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.log");

        write_artifact(&path, b"line one\nline two").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"line one\nline two\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.flv");
        std::fs::write(&path, b"old contents that are longer").unwrap();

        write_artifact(&path, b"new").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new\n");
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_artifact(&dir.path().join("nope").join("job.log"), b"x").unwrap_err();
        assert!(matches!(err, SauceRestError::Io(_)));
    }
}
