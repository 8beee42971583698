use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Non-fatal notice raised while parsing. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    BomStripped {
        num_bytes: usize,
    },
    WhitespaceSeparator {
        line_number: usize,
    },
    UnknownKey {
        line_number: usize,
        key: String,
    },
    ValueTruncated {
        line_number: usize,
        max_length_bytes: usize,
    },
    NoSeparator {
        line_number: usize,
    },
    NoKey {
        line_number: usize,
    },
    NoValue {
        line_number: usize,
    },
    DisallowTypoFixed {
        line_number: usize,
        key: String,
    },
    GlobalAgentAssumed {
        user_agent: String,
    },
    IndexNormalized {
        value: String,
        normalized: String,
    },
}

impl ParseEvent {
    pub fn severity(&self) -> Severity {
        match self {
            ParseEvent::NoSeparator { .. }
            | ParseEvent::NoKey { .. }
            | ParseEvent::NoValue { .. }
            | ParseEvent::UnknownKey { .. } => Severity::Warning,
            _ => Severity::Info,
        }
    }

    pub fn line_number(&self) -> Option<usize> {
        match self {
            ParseEvent::WhitespaceSeparator { line_number }
            | ParseEvent::UnknownKey { line_number, .. }
            | ParseEvent::ValueTruncated { line_number, .. }
            | ParseEvent::NoSeparator { line_number }
            | ParseEvent::NoKey { line_number }
            | ParseEvent::NoValue { line_number }
            | ParseEvent::DisallowTypoFixed { line_number, .. } => Some(*line_number),
            ParseEvent::BomStripped { .. }
            | ParseEvent::GlobalAgentAssumed { .. }
            | ParseEvent::IndexNormalized { .. } => None,
        }
    }
}

impl fmt::Display for ParseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseEvent::BomStripped { num_bytes } => {
                write!(f, "Skipped {num_bytes} byte-order mark byte(s).")
            }
            ParseEvent::WhitespaceSeparator { .. } => {
                write!(f, "Assuming whitespace as a separator.")
            }
            ParseEvent::UnknownKey { key, .. } => write!(f, "Unknown key \"{key}\"."),
            ParseEvent::ValueTruncated {
                max_length_bytes, ..
            } => write!(f, "Value truncated to {max_length_bytes} bytes."),
            ParseEvent::NoSeparator { .. } => write!(f, "No separator found."),
            ParseEvent::NoKey { .. } => write!(f, "No key found."),
            ParseEvent::NoValue { .. } => write!(f, "No value found."),
            ParseEvent::DisallowTypoFixed { key, .. } => {
                write!(f, "Fixed typo: \"{key}\" -> \"disallow\".")
            }
            ParseEvent::GlobalAgentAssumed { user_agent } => {
                write!(f, "Assuming \"{user_agent}\" user-agent as \"*\".")
            }
            ParseEvent::IndexNormalized { value, normalized } => {
                write!(f, "Allowing normalized path: \"{value}\" -> \"{normalized}\".")
            }
        }
    }
}
