use crate::robots::directive::DirectiveKind;
use crate::robots::parse_event::ParseEvent;
use crate::robots::parse_reporter::ParseReporter;
use crate::robots::pattern_canonicalizer::canonicalize;
use crate::robots::robots_txt_contents::{AgentMatch, Group, RobotsTxtContents, Rule, RuleKind};
use crate::robots::robots_txt_matcher::RobotsTxtMatcher;

/// Consumer side of the tokenizer: receives one call per directive,
/// bracketed by `handle_start` and `handle_end`.
pub trait ParseHandler {
    fn handle_start(&mut self);
    fn handle_directive(&mut self, kind: DirectiveKind, value: &str);
    fn handle_end(&mut self);
}

/// Whether the group being built has seen anything but User-agent lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupState {
    /// Only User-agent lines so far; another one joins this group.
    #[default]
    Empty,
    /// A rule, sitemap or unknown line followed; the next User-agent line
    /// opens a new group.
    Accumulating,
}

/// Folds directives into [`RobotsTxtContents`].
///
/// One instance serves exactly one parse.
pub struct RobotsTxtParseHandler<R> {
    reporter: R,
    contents: RobotsTxtContents,
    current_group: Group,
    state: GroupState,
}

impl<R> RobotsTxtParseHandler<R>
where
    R: ParseReporter,
{
    pub fn new(reporter: R) -> Self {
        Self {
            reporter,
            contents: RobotsTxtContents::default(),
            current_group: Group::default(),
            state: GroupState::Empty,
        }
    }

    pub fn state(&self) -> GroupState {
        self.state
    }

    pub fn contents(&self) -> &RobotsTxtContents {
        &self.contents
    }

    /// Hands the finished contents to a matcher. Only valid after
    /// `handle_end`.
    pub(crate) fn compute(self) -> RobotsTxtMatcher {
        RobotsTxtMatcher::new(self.contents)
    }

    fn seal_current_group(&mut self) {
        let group = std::mem::take(&mut self.current_group);
        self.contents.add_group(group);
        self.state = GroupState::Empty;
    }

    fn handle_user_agent(&mut self, value: &str) {
        if self.state == GroupState::Accumulating {
            self.seal_current_group();
        }

        if self.current_group.add_user_agent(value) == AgentMatch::GlobalWithTrailer {
            self.reporter.report(ParseEvent::GlobalAgentAssumed {
                user_agent: value.to_owned(),
            });
        }
    }

    fn handle_rule(&mut self, kind: RuleKind, value: &str) {
        self.state = GroupState::Accumulating;
        if !self.current_group.accepts_rules() {
            return;
        }

        let pattern = canonicalize(value);
        if kind == RuleKind::Allow {
            self.add_index_normalization(value, &pattern);
        }
        self.current_group.add_rule(Rule::new(kind, pattern));
    }

    /// `Allow: /dir/index.html` also allows exactly `/dir/`.
    fn add_index_normalization(&mut self, value: &str, pattern: &str) {
        let Some(slash) = pattern.rfind('/') else {
            return;
        };
        let file_name = &pattern[slash + 1..];
        if file_name != "index.htm" && file_name != "index.html" {
            return;
        }

        let normalized = format!("{}$", &pattern[..=slash]);
        if self.current_group.add_rule(Rule::allow(normalized.as_str())) {
            self.reporter.report(ParseEvent::IndexNormalized {
                value: value.to_owned(),
                normalized,
            });
        }
    }
}

impl<R> ParseHandler for RobotsTxtParseHandler<R>
where
    R: ParseReporter,
{
    fn handle_start(&mut self) {
        self.contents = RobotsTxtContents::default();
        self.current_group = Group::default();
        self.state = GroupState::Empty;
    }

    fn handle_directive(&mut self, kind: DirectiveKind, value: &str) {
        match kind {
            DirectiveKind::UserAgent => self.handle_user_agent(value),
            DirectiveKind::Allow => self.handle_rule(RuleKind::Allow, value),
            DirectiveKind::Disallow => self.handle_rule(RuleKind::Disallow, value),
            DirectiveKind::Sitemap | DirectiveKind::Unknown => {
                self.state = GroupState::Accumulating;
            }
        }
    }

    fn handle_end(&mut self) {
        self.seal_current_group();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robots::parse_reporter::{CollectingParseReporter, NoopParseReporter};

    fn build(directives: &[(DirectiveKind, &str)]) -> RobotsTxtContents {
        let mut handler = RobotsTxtParseHandler::new(NoopParseReporter);
        handler.handle_start();
        for (kind, value) in directives {
            handler.handle_directive(*kind, value);
        }
        handler.handle_end();
        handler.contents().clone()
    }

    #[test]
    fn consecutive_user_agents_share_a_group() {
        let contents = build(&[
            (DirectiveKind::UserAgent, "foo"),
            (DirectiveKind::UserAgent, "bar/1.0"),
            (DirectiveKind::Disallow, "/x"),
        ]);
        assert_eq!(
            contents,
            RobotsTxtContents::new(vec![Group::new(
                ["foo", "bar"],
                [Rule::disallow("/x")],
                false
            )])
        );
    }

    #[test]
    fn user_agent_after_content_starts_a_new_group() {
        let contents = build(&[
            (DirectiveKind::UserAgent, "foo"),
            (DirectiveKind::Allow, "/a"),
            (DirectiveKind::UserAgent, "bar"),
            (DirectiveKind::Disallow, "/b"),
            (DirectiveKind::Sitemap, "http://example.com/sitemap.xml"),
            (DirectiveKind::UserAgent, "baz"),
            (DirectiveKind::Unknown, "10"),
            (DirectiveKind::UserAgent, "*"),
        ]);
        assert_eq!(
            contents,
            RobotsTxtContents::new(vec![
                Group::new(["foo"], [Rule::allow("/a")], false),
                Group::new(["bar"], [Rule::disallow("/b")], false),
                Group::new(["baz"], [], false),
                Group::new(Vec::<String>::new(), [], true),
            ])
        );
    }

    #[test]
    fn state_tracks_content_since_last_user_agent() {
        let mut handler = RobotsTxtParseHandler::new(NoopParseReporter);
        handler.handle_start();
        assert_eq!(handler.state(), GroupState::Empty);
        handler.handle_directive(DirectiveKind::UserAgent, "foo");
        assert_eq!(handler.state(), GroupState::Empty);
        handler.handle_directive(DirectiveKind::Sitemap, "http://example.com/s.xml");
        assert_eq!(handler.state(), GroupState::Accumulating);
        handler.handle_directive(DirectiveKind::UserAgent, "bar");
        assert_eq!(handler.state(), GroupState::Empty);
        assert_eq!(handler.contents().groups().len(), 1);
    }

    #[test]
    fn rules_before_any_user_agent_are_dropped() {
        let contents = build(&[
            (DirectiveKind::Disallow, "/x"),
            (DirectiveKind::Allow, "/y"),
            (DirectiveKind::UserAgent, "foo"),
            (DirectiveKind::Disallow, "/z"),
        ]);
        assert_eq!(
            contents,
            RobotsTxtContents::new(vec![
                Group::default(),
                Group::new(["foo"], [Rule::disallow("/z")], false),
            ])
        );
    }

    #[test]
    fn empty_input_seals_one_empty_group() {
        assert_eq!(build(&[]), RobotsTxtContents::new(vec![Group::default()]));
    }

    #[test]
    fn wildcard_with_trailer_is_global() {
        let reporter = CollectingParseReporter::new();
        let mut handler = RobotsTxtParseHandler::new(&reporter);
        handler.handle_start();
        handler.handle_directive(DirectiveKind::UserAgent, "* foo");
        handler.handle_directive(DirectiveKind::Disallow, "/");
        handler.handle_end();
        assert!(handler.contents().groups()[0].is_global());
        assert_eq!(
            reporter.events(),
            vec![ParseEvent::GlobalAgentAssumed {
                user_agent: "* foo".into()
            }]
        );
    }

    #[test]
    fn rule_patterns_are_canonicalized() {
        let contents = build(&[
            (DirectiveKind::UserAgent, "*"),
            (DirectiveKind::Disallow, "/caf\u{e9}/%aa"),
        ]);
        assert!(
            contents.groups()[0]
                .rules()
                .contains(&Rule::disallow("/caf%C3%A9/%AA"))
        );
    }

    #[test]
    fn allow_index_html_also_allows_its_directory() {
        let reporter = CollectingParseReporter::new();
        let mut handler = RobotsTxtParseHandler::new(&reporter);
        handler.handle_start();
        handler.handle_directive(DirectiveKind::UserAgent, "foo");
        handler.handle_directive(DirectiveKind::Allow, "/a/index.html");
        handler.handle_directive(DirectiveKind::Allow, "/b/index.htm");
        handler.handle_directive(DirectiveKind::Allow, "/a/$");
        handler.handle_end();

        assert_eq!(
            handler.contents().groups()[0],
            Group::new(
                ["foo"],
                [
                    Rule::allow("/a/index.html"),
                    Rule::allow("/a/$"),
                    Rule::allow("/b/index.htm"),
                    Rule::allow("/b/$"),
                ],
                false
            )
        );
        assert_eq!(
            reporter.events(),
            vec![
                ParseEvent::IndexNormalized {
                    value: "/a/index.html".into(),
                    normalized: "/a/$".into()
                },
                ParseEvent::IndexNormalized {
                    value: "/b/index.htm".into(),
                    normalized: "/b/$".into()
                },
            ]
        );
    }

    #[test]
    fn index_normalization_is_idempotent_and_allow_only() {
        let reporter = CollectingParseReporter::new();
        let mut handler = RobotsTxtParseHandler::new(&reporter);
        handler.handle_start();
        handler.handle_directive(DirectiveKind::UserAgent, "foo");
        handler.handle_directive(DirectiveKind::Allow, "/a/$");
        handler.handle_directive(DirectiveKind::Allow, "/a/index.html");
        handler.handle_directive(DirectiveKind::Disallow, "/c/index.html");
        handler.handle_directive(DirectiveKind::Allow, "/d/index.html5");
        handler.handle_directive(DirectiveKind::Allow, "index.html");
        handler.handle_end();

        assert_eq!(
            handler.contents().groups()[0],
            Group::new(
                ["foo"],
                [
                    Rule::allow("/a/$"),
                    Rule::allow("/a/index.html"),
                    Rule::disallow("/c/index.html"),
                    Rule::allow("/d/index.html5"),
                    Rule::allow("index.html"),
                ],
                false
            )
        );
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn compute_binds_contents_to_a_matcher() {
        let mut handler = RobotsTxtParseHandler::new(NoopParseReporter);
        handler.handle_start();
        handler.handle_directive(DirectiveKind::UserAgent, "foo");
        handler.handle_directive(DirectiveKind::Disallow, "/");
        handler.handle_end();
        let expected = handler.contents().clone();
        let matcher = handler.compute();
        assert_eq!(matcher.contents(), &expected);
        assert!(!matcher.single_agent_allowed_by_robots("foo", "http://example.com/x"));
    }
}
