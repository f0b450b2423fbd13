//! Downloadable job artifacts

/// Artifact a job produces that can be saved to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Screen recording of the session.
    Video,
    /// Server log of the session.
    Log,
}

impl ArtifactKind {
    /// File extension (without the dot) for saved artifacts of this kind.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Video => "flv",
            Self::Log => "log",
        }
    }

    /// Classify a request URL the way saved artifacts are named: anything
    /// ending in `.flv` is video, everything else is a log.
    pub fn from_url(url: &str) -> Self {
        if url.ends_with(".flv") {
            Self::Video
        } else {
            Self::Log
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_suffix_decides_kind() {
        assert_eq!(
            ArtifactKind::from_url("https://saucelabs.com/rest/u/jobs/1/results/video.flv"),
            ArtifactKind::Video
        );
        assert_eq!(
            ArtifactKind::from_url("https://saucelabs.com/rest/v1/u/jobs/1/assets/selenium-server.log"),
            ArtifactKind::Log
        );
        assert_eq!(ArtifactKind::from_url("https://x/anything"), ArtifactKind::Log);
    }

    #[test]
    fn extensions() {
        assert_eq!(ArtifactKind::Video.extension(), "flv");
        assert_eq!(ArtifactKind::Log.extension(), "log");
    }
}
