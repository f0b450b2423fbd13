//! Pure job logic: list queries, list parsing and artifact naming.

pub mod artifacts;
pub mod list;

pub use artifacts::{artifact_file_name, artifact_path, ensure_file_safe_job_id};
pub use list::{parse_job_list, unix_seconds, JobListQuery};
