use crate::robots::parse_reporter::{NoopParseReporter, ParseReporter};
use crate::robots::parser_config::ParserConfig;
use crate::robots::robots_txt_matcher::RobotsTxtMatcher;
use crate::robots::robots_txt_parse_handler::RobotsTxtParseHandler;
use crate::robots::robots_txt_tokenizer::RobotsTxtTokenizer;

/// Turns robots.txt bytes into a [`RobotsTxtMatcher`].
///
/// Parsing never fails: malformed lines are skipped or downgraded and
/// surface only as events on the reporter. Each call to [`parse`] runs on a
/// fresh handler, so one parser can be reused for many bodies.
///
/// [`parse`]: RobotsTxtParser::parse
#[derive(Debug, Clone)]
pub struct RobotsTxtParser<R = NoopParseReporter> {
    config: ParserConfig,
    reporter: R,
}

impl RobotsTxtParser {
    pub fn new() -> Self {
        Self::with_reporter(ParserConfig::default(), NoopParseReporter)
    }
}

impl Default for RobotsTxtParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RobotsTxtParser<R>
where
    R: ParseReporter,
{
    pub fn with_reporter(config: ParserConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn parse(&self, body: &[u8]) -> RobotsTxtMatcher {
        let tokenizer = RobotsTxtTokenizer::new(self.config, &self.reporter);
        let mut handler = RobotsTxtParseHandler::new(&self.reporter);
        tokenizer.tokenize(body, &mut handler);
        handler.compute()
    }
}

/// Parses `body` with default settings, discarding diagnostics.
pub fn parse(body: &[u8]) -> RobotsTxtMatcher {
    RobotsTxtParser::new().parse(body)
}
