//! Artifact file naming

use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use saucerest_domain::constants::ARTIFACT_TIMESTAMP_FORMAT;
use saucerest_domain::{ArtifactKind, Result, SauceRestError};

/// `{job_id}{yyyyMMdd_HHmmss}.{ext}`, where the extension follows the
/// request URL (`.flv` for video, `.log` otherwise).
///
/// Names have one-second granularity: two downloads of the same job within
/// the same second produce the same name and the later one overwrites.
pub fn artifact_file_name<Tz>(job_id: &str, request_url: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let kind = ArtifactKind::from_url(request_url);
    format!("{job_id}{}.{}", at.format(ARTIFACT_TIMESTAMP_FORMAT), kind.extension())
}

/// Reject job ids that would place an artifact outside its location.
///
/// # Errors
///
/// Returns `SauceRestError::Io` when the id contains a path separator or
/// `..`.
pub fn ensure_file_safe_job_id(job_id: &str) -> Result<()> {
    if job_id.chars().any(std::path::is_separator) || job_id.contains("..") {
        return Err(SauceRestError::Io(format!(
            "job id {job_id:?} cannot be used in an artifact file name"
        )));
    }
    Ok(())
}

/// Full destination path for an artifact saved directly under `location`.
///
/// # Errors
///
/// Returns `SauceRestError::Io` if `job_id` is not safe to embed in a file
/// name (see [`ensure_file_safe_job_id`]).
pub fn artifact_path<Tz>(
    location: &Path,
    job_id: &str,
    request_url: &str,
    at: &DateTime<Tz>,
) -> Result<PathBuf>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ensure_file_safe_job_id(job_id)?;
    let path = location.join(artifact_file_name(job_id, request_url, at));
    if path.parent() != Some(location) {
        return Err(SauceRestError::Io(format!(
            "artifact path {} escapes {}",
            path.display(),
            location.display()
        )));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn video_name_uses_timestamp_and_flv() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let name = artifact_file_name("abc123", "https://h/rest/u/jobs/abc123/results/video.flv", &at);
        assert_eq!(name, "abc12320240309_140507.flv");
    }

    #[test]
    fn non_flv_urls_are_saved_as_logs() {
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let name =
            artifact_file_name("job", "https://h/rest/v1/u/jobs/job/assets/selenium-server.log", &at);
        assert_eq!(name, "job20241231_235959.log");
    }

    #[test]
    fn path_is_joined_under_location() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let path =
            artifact_path(Path::new("/tmp/artifacts"), "j", "https://h/video.flv", &at).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/artifacts/j20240102_030405.flv"));
    }

    #[test]
    fn absolute_job_id_cannot_replace_location() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let result = artifact_path(Path::new("/tmp/artifacts"), "/etc/evil", "https://h/video.flv", &at);
        assert!(matches!(result, Err(SauceRestError::Io(_))));
    }

    #[test]
    fn parent_traversal_in_job_id_is_rejected() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        for job_id in ["../escape", "..", "a/../../b", "nested/job"] {
            let result = artifact_path(Path::new("/tmp/artifacts"), job_id, "https://h/video.flv", &at);
            assert!(matches!(result, Err(SauceRestError::Io(_))), "{job_id} was accepted");
        }
    }

    #[test]
    fn opaque_ids_with_dots_and_dashes_are_accepted() {
        assert!(ensure_file_safe_job_id("4f2c.a-9_b").is_ok());
    }

    #[test]
    fn same_second_names_collide() {
        let first = Utc.timestamp_opt(1_700_000_000, 100_000_000).unwrap();
        let second = Utc.timestamp_opt(1_700_000_000, 900_000_000).unwrap();
        assert_eq!(
            artifact_file_name("j", "https://h/video.flv", &first),
            artifact_file_name("j", "https://h/video.flv", &second)
        );
    }
}
