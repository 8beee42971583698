use crate::robots::matching_strategy::{LongestMatchStrategy, MatchingStrategy};
use crate::robots::pattern_canonicalizer::canonicalize;
use crate::robots::robots_txt_contents::{RobotsTxtContents, RuleKind};
use url::Url;

/// Highest priority seen so far for one rule kind, split by whether it
/// came from an agent-specific group or from the `*` group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Match {
    priority_specific: usize,
    priority_global: usize,
}

impl Match {
    fn update_specific(&mut self, priority: usize) {
        self.priority_specific = self.priority_specific.max(priority);
    }

    fn update_global(&mut self, priority: usize) {
        self.priority_global = self.priority_global.max(priority);
    }

    fn reset_global(&mut self) {
        self.priority_global = 0;
    }
}

fn allow_verdict(allow: Match, disallow: Match) -> bool {
    if allow.priority_specific > 0 || disallow.priority_specific > 0 {
        return allow.priority_specific >= disallow.priority_specific;
    }
    if allow.priority_global > 0 || disallow.priority_global > 0 {
        return allow.priority_global >= disallow.priority_global;
    }
    true
}

fn agent_eq(requested: &str, declared: &str) -> bool {
    requested
        .chars()
        .flat_map(char::to_lowercase)
        .eq(declared.chars().flat_map(char::to_lowercase))
}

/// Path and query of `url` as matched against rule patterns. The text is
/// taken as written, without dot-segment removal or percent-encoding of
/// reserved characters, and canonicalized like a rule pattern. Anything
/// that does not parse as an absolute hierarchical URL is matched as `/`.
pub fn resolve_path(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(parsed) if !parsed.cannot_be_a_base() => parsed,
        _ => {
            tracing::warn!(url, "Malformed URL, matching against \"/\"");
            return "/".to_owned();
        }
    };

    let raw = raw_path_and_query(url, has_authority_scheme(parsed.scheme()));
    let path = canonicalize(raw);
    if !path.starts_with('/') {
        format!("/{path}")
    } else {
        path.into_owned()
    }
}

// Schemes whose authority may follow any run of slashes or backslashes.
fn has_authority_scheme(scheme: &str) -> bool {
    matches!(scheme, "http" | "https" | "ws" | "wss" | "ftp")
}

/// Everything after the authority up to the fragment, exactly as written.
fn raw_path_and_query(url: &str, authority_scheme: bool) -> &str {
    let trimmed = url.trim_matches(|ch: char| ch <= ' ');
    let without_fragment = match trimmed.find('#') {
        Some(hash) => &trimmed[..hash],
        None => trimmed,
    };
    let Some(colon) = without_fragment.find(':') else {
        return "";
    };
    let after_scheme = &without_fragment[colon + 1..];

    let is_separator = |ch: char| ch == '/' || (authority_scheme && ch == '\\');
    let authority_and_rest = if authority_scheme {
        after_scheme.trim_start_matches(is_separator)
    } else {
        match after_scheme.strip_prefix("//") {
            Some(rest) => rest,
            None => return after_scheme,
        }
    };

    authority_and_rest
        .find(|ch: char| ch == '?' || is_separator(ch))
        .map_or("", |end| &authority_and_rest[end..])
}

/// Immutable verdict engine over a parsed robots.txt file.
#[derive(Debug, Clone)]
pub struct RobotsTxtMatcher<S = LongestMatchStrategy> {
    contents: RobotsTxtContents,
    strategy: S,
}

impl RobotsTxtMatcher {
    pub fn new(contents: RobotsTxtContents) -> Self {
        Self {
            contents,
            strategy: LongestMatchStrategy,
        }
    }
}

impl<S> RobotsTxtMatcher<S>
where
    S: MatchingStrategy,
{
    pub fn with_strategy<T: MatchingStrategy>(self, strategy: T) -> RobotsTxtMatcher<T> {
        RobotsTxtMatcher {
            contents: self.contents,
            strategy,
        }
    }

    pub fn contents(&self) -> &RobotsTxtContents {
        &self.contents
    }

    /// True if any of `user_agents` may fetch `url`.
    pub fn allowed_by_robots<A: AsRef<str>>(&self, user_agents: &[A], url: &str) -> bool {
        self.compute_verdict(user_agents, &resolve_path(url), false)
    }

    pub fn single_agent_allowed_by_robots(&self, user_agent: &str, url: &str) -> bool {
        self.allowed_by_robots(&[user_agent], url)
    }

    /// Like [`allowed_by_robots`](Self::allowed_by_robots), but the `*`
    /// group never applies, even when no group names the agents.
    pub fn ignore_global_allowed_by_robots<A: AsRef<str>>(
        &self,
        user_agents: &[A],
        url: &str,
    ) -> bool {
        self.compute_verdict(user_agents, &resolve_path(url), true)
    }

    /// Verdict for an already resolved path.
    pub fn compute_verdict<A: AsRef<str>>(
        &self,
        user_agents: &[A],
        path: &str,
        ignore_global: bool,
    ) -> bool {
        let (allow, disallow) = self.compute_match_priorities(user_agents, path, ignore_global);
        allow_verdict(allow, disallow)
    }

    fn compute_match_priorities<A: AsRef<str>>(
        &self,
        user_agents: &[A],
        path: &str,
        ignore_global: bool,
    ) -> (Match, Match) {
        let mut allow = Match::default();
        let mut disallow = Match::default();
        let mut found_specific_group = false;

        for group in self.contents.groups() {
            let is_specific = user_agents.iter().any(|requested| {
                group
                    .agents()
                    .iter()
                    .any(|declared| agent_eq(requested.as_ref(), declared))
            });
            let is_global = !ignore_global && group.is_global();
            found_specific_group |= is_specific;
            if !is_specific && !is_global {
                continue;
            }

            for rule in group.rules() {
                let (tier, priority) = match rule.kind() {
                    RuleKind::Allow => (
                        &mut allow,
                        self.strategy.match_allow_priority(path, rule.pattern()),
                    ),
                    RuleKind::Disallow => (
                        &mut disallow,
                        self.strategy.match_disallow_priority(path, rule.pattern()),
                    ),
                };
                if is_specific {
                    tier.update_specific(priority);
                }
                if is_global {
                    tier.update_global(priority);
                }
            }
        }

        // A group naming one of the agents overrides `*` entirely.
        if found_specific_group {
            allow.reset_global();
            disallow.reset_global();
        }

        (allow, disallow)
    }
}
