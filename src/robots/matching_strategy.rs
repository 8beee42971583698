//! Pattern matching and priority computation for Allow/Disallow rules.
//!
//! A pattern may contain `*`, matching any run of bytes including an empty
//! one, and may end in `$`, anchoring it to the end of the path. Anywhere
//! else `$` is literal. Matching is case-sensitive.

/// Computes how strongly a rule pattern applies to a path. Zero means the
/// rule does not apply; among rules that apply the highest priority wins.
pub trait MatchingStrategy {
    fn match_allow_priority(&self, path: &str, pattern: &str) -> usize;
    fn match_disallow_priority(&self, path: &str, pattern: &str) -> usize;
}

/// The longest matching pattern is the most specific one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestMatchStrategy;

impl MatchingStrategy for LongestMatchStrategy {
    fn match_allow_priority(&self, path: &str, pattern: &str) -> usize {
        match_priority(path, pattern)
    }

    fn match_disallow_priority(&self, path: &str, pattern: &str) -> usize {
        match_priority(path, pattern)
    }
}

/// Declared length of `pattern` without its end anchor if it matches
/// `path`, otherwise 0. An empty pattern matches everything with priority 0.
pub fn match_priority(path: &str, pattern: &str) -> usize {
    let (body, anchored) = match pattern.strip_suffix('$') {
        Some(body) => (body, true),
        None => (pattern, false),
    };

    if matches(path.as_bytes(), body.as_bytes(), anchored) {
        body.len()
    } else {
        0
    }
}

fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(from);
    }
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from + offset)
}

fn matches(path: &[u8], body: &[u8], anchored: bool) -> bool {
    let mut segments = body.split(|&b| b == b'*');
    let head = segments.next().unwrap_or_default();
    if !path.starts_with(head) {
        return false;
    }

    let tail: Vec<&[u8]> = segments.collect();
    let Some((last, middle)) = tail.split_last() else {
        return !anchored || head.len() == path.len();
    };

    // Leftmost placement of each middle segment leaves the most room for
    // the ones after it.
    let mut position = head.len();
    for segment in middle {
        match find_from(path, segment, position) {
            Some(found) => position = found + segment.len(),
            None => return false,
        }
    }

    if anchored {
        path.len() >= position + last.len() && path.ends_with(last)
    } else {
        find_from(path, last, position).is_some()
    }
}
