mod directive;
mod matching_strategy;
mod parse_event;
mod parse_reporter;
mod parser_config;
mod pattern_canonicalizer;
mod robots_txt_contents;
mod robots_txt_matcher;
mod robots_txt_parse_handler;
mod robots_txt_parser;
mod robots_txt_source;
mod robots_txt_tokenizer;
mod tracing_parse_reporter;

pub use directive::{Classification, Directive, DirectiveKind};
pub use matching_strategy::{LongestMatchStrategy, MatchingStrategy, match_priority};
pub use parse_event::{ParseEvent, Severity};
pub use parse_reporter::{CollectingParseReporter, NoopParseReporter, ParseReporter};
pub use parser_config::{DEFAULT_VALUE_MAX_LENGTH_BYTES, ParserConfig};
pub use pattern_canonicalizer::canonicalize;
pub use robots_txt_contents::{Group, RobotsTxtContents, Rule, RuleKind};
pub use robots_txt_matcher::{RobotsTxtMatcher, resolve_path};
pub use robots_txt_parse_handler::{GroupState, ParseHandler, RobotsTxtParseHandler};
pub use robots_txt_parser::{RobotsTxtParser, parse};
pub use robots_txt_source::RobotsTxtSource;
pub use robots_txt_tokenizer::RobotsTxtTokenizer;
pub use tracing_parse_reporter::TracingParseReporter;
