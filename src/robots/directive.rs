/// Kind of a single robots.txt line, derived from its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    UserAgent,
    Allow,
    Disallow,
    Sitemap,
    Unknown,
}

/// Misspellings of `disallow` common enough in the wild to be accepted.
const DISALLOW_TYPOS: [&str; 5] = ["dissallow", "dissalow", "disalow", "diasllow", "disallaw"];

/// Result of classifying a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: DirectiveKind,
    pub typo_corrected: bool,
}

impl DirectiveKind {
    /// Classifies a trimmed key, ignoring case and correcting known
    /// `disallow` typos.
    pub fn classify(key: &str) -> Classification {
        let kind = if key.eq_ignore_ascii_case("user-agent") {
            DirectiveKind::UserAgent
        } else if key.eq_ignore_ascii_case("allow") {
            DirectiveKind::Allow
        } else if key.eq_ignore_ascii_case("disallow") {
            DirectiveKind::Disallow
        } else if key.eq_ignore_ascii_case("sitemap") {
            DirectiveKind::Sitemap
        } else if DISALLOW_TYPOS
            .iter()
            .any(|typo| key.eq_ignore_ascii_case(typo))
        {
            return Classification {
                kind: DirectiveKind::Disallow,
                typo_corrected: true,
            };
        } else {
            DirectiveKind::Unknown
        };

        Classification {
            kind,
            typo_corrected: false,
        }
    }
}

/// One key/value line after tokenization. Lives only until it is handed to
/// a [`ParseHandler`](crate::robots::ParseHandler).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub value: String,
}

impl Directive {
    pub fn new(kind: DirectiveKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
