use crate::error::RobotsError;
use crate::robots::parse_reporter::ParseReporter;
use crate::robots::robots_txt_matcher::RobotsTxtMatcher;
use crate::robots::robots_txt_parser::RobotsTxtParser;
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Raw robots.txt bytes together with where they came from.
#[derive(Clone)]
pub struct RobotsTxtSource {
    content: Vec<u8>,
    origin: String,
}

impl RobotsTxtSource {
    pub fn from_bytes(origin: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            origin: origin.into(),
        }
    }

    pub async fn load_from_path(path: &Path) -> Result<Self, RobotsError> {
        let origin = path.display().to_string();
        match tokio::fs::read(path).await {
            Ok(content) => Ok(Self { content, origin }),
            Err(source) => Err(RobotsError::UnreadableSource { origin, source }),
        }
    }

    pub async fn load_from_stdin() -> Result<Self, RobotsError> {
        Self::load_from_reader("<stdin>", tokio::io::stdin()).await
    }

    pub async fn load_from_reader<T>(
        origin: impl Into<String>,
        mut reader: T,
    ) -> Result<Self, RobotsError>
    where
        T: AsyncRead + Unpin,
    {
        let origin = origin.into();
        let mut content = Vec::new();
        match reader.read_to_end(&mut content).await {
            Ok(_) => Ok(Self { content, origin }),
            Err(source) => Err(RobotsError::UnreadableSource { origin, source }),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn matcher<R: ParseReporter>(&self, parser: &RobotsTxtParser<R>) -> RobotsTxtMatcher {
        parser.parse(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_bytes_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"User-agent: *\nDisallow: /private\n").unwrap();

        let source = RobotsTxtSource::load_from_path(file.path()).await.unwrap();
        assert_eq!(source.content(), b"User-agent: *\nDisallow: /private\n");
        assert_eq!(source.origin(), file.path().display().to_string());

        let matcher = source.matcher(&RobotsTxtParser::new());
        assert!(!matcher.single_agent_allowed_by_robots("foo", "http://example.com/private"));
        assert!(matcher.single_agent_allowed_by_robots("foo", "http://example.com/public"));
    }

    #[tokio::test]
    async fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-robots.txt");

        let result = RobotsTxtSource::load_from_path(&path).await;
        assert!(matches!(
            result,
            Err(RobotsError::UnreadableSource { ref origin, .. }) if origin.ends_with("missing-robots.txt")
        ));
    }

    #[tokio::test]
    async fn loads_bytes_from_a_reader() {
        let body: &[u8] = b"User-agent: foo\nAllow: /\n";
        let source = RobotsTxtSource::load_from_reader("<test>", body).await.unwrap();
        assert_eq!(source.origin(), "<test>");
        assert_eq!(source.content(), body);
    }

    #[test]
    fn keeps_bytes_untouched() {
        let source = RobotsTxtSource::from_bytes("inline", &b"\xEF\xBB\xBFUser-agent: *"[..]);
        assert_eq!(source.content(), b"\xEF\xBB\xBFUser-agent: *");
    }
}
