use std::collections::HashSet;

/// Verdict a rule votes for when its pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Allow,
    Disallow,
}

/// An Allow or Disallow rule with its canonical pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    kind: RuleKind,
    pattern: String,
}

impl Rule {
    pub fn new(kind: RuleKind, pattern: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
        }
    }

    pub fn allow(pattern: impl Into<String>) -> Self {
        Self::new(RuleKind::Allow, pattern)
    }

    pub fn disallow(pattern: impl Into<String>) -> Self {
        Self::new(RuleKind::Disallow, pattern)
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Outcome of feeding a User-agent value to a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AgentMatch {
    /// `*` on its own.
    Global,
    /// `*` followed by whitespace and more text, still read as `*`.
    GlobalWithTrailer,
    Specific,
}

/// A block of User-agent lines together with the rules that follow them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    agents: HashSet<String>,
    rules: HashSet<Rule>,
    global: bool,
}

impl Group {
    pub fn new(
        agents: impl IntoIterator<Item = impl Into<String>>,
        rules: impl IntoIterator<Item = Rule>,
        global: bool,
    ) -> Self {
        Self {
            agents: agents.into_iter().map(Into::into).collect(),
            rules: rules.into_iter().collect(),
            global,
        }
    }

    pub fn agents(&self) -> &HashSet<String> {
        &self.agents
    }

    pub fn rules(&self) -> &HashSet<Rule> {
        &self.rules
    }

    pub fn is_global(&self) -> bool {
        self.global
    }

    /// True once the group names an agent or the wildcard, which is what
    /// makes later Allow/Disallow lines worth keeping.
    pub(crate) fn accepts_rules(&self) -> bool {
        self.global || !self.agents.is_empty()
    }

    pub(crate) fn add_user_agent(&mut self, user_agent: &str) -> AgentMatch {
        let mut chars = user_agent.chars();
        if chars.next() == Some('*') {
            match chars.next() {
                None => {
                    self.global = true;
                    return AgentMatch::Global;
                }
                Some(ch) if ch.is_whitespace() => {
                    self.global = true;
                    return AgentMatch::GlobalWithTrailer;
                }
                Some(_) => {}
            }
        }

        let end = user_agent
            .char_indices()
            .find(|&(_, ch)| !(ch.is_alphabetic() || ch == '-' || ch == '_'))
            .map_or(user_agent.len(), |(index, _)| index);
        self.agents.insert(user_agent[..end].to_owned());
        AgentMatch::Specific
    }

    /// Returns false if an equal rule was already present.
    pub(crate) fn add_rule(&mut self, rule: Rule) -> bool {
        self.rules.insert(rule)
    }
}

/// Every group of a robots.txt file in the order it was declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsTxtContents {
    groups: Vec<Group>,
}

impl RobotsTxtContents {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub(crate) fn add_group(&mut self, group: Group) {
        self.groups.push(group);
    }
}
