//! Byte-level robots.txt tokenizer.
//!
//! Splits a body into lines, drops comments and a leading byte-order mark,
//! and turns each line into a key/value [`Directive`] handed to a
//! [`ParseHandler`]. Malformed lines never stop the pass; they are skipped
//! or downgraded and reported through the [`ParseReporter`].

use crate::robots::directive::{Directive, DirectiveKind};
use crate::robots::parse_event::ParseEvent;
use crate::robots::parse_reporter::ParseReporter;
use crate::robots::parser_config::ParserConfig;
use crate::robots::robots_txt_parse_handler::ParseHandler;

const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";

fn is_whitespace(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

fn trim_whitespace(bytes: &[u8]) -> Option<&[u8]> {
    let begin = bytes.iter().position(|&b| !is_whitespace(b))?;
    let end = bytes.iter().rposition(|&b| !is_whitespace(b))?;
    Some(&bytes[begin..=end])
}

/// Number of leading bytes that follow the UTF-8 BOM. A truncated BOM is
/// skipped as well.
fn bom_prefix_len(body: &[u8]) -> usize {
    body.iter()
        .zip(UTF8_BOM)
        .take_while(|(byte, bom_byte)| byte == bom_byte)
        .count()
}

/// Lines split on `\n`, `\r` or `\r\n`. The last line is yielded even when
/// unterminated or empty.
struct Lines<'a> {
    rest: &'a [u8],
    previous_was_carriage_return: bool,
    finished: bool,
}

impl<'a> Lines<'a> {
    fn new(body: &'a [u8]) -> Self {
        Self {
            rest: body,
            previous_was_carriage_return: false,
            finished: false,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let rest = self.rest;
            let Some(end) = rest.iter().position(|&b| b == b'\n' || b == b'\r') else {
                self.finished = true;
                return Some(rest);
            };

            let line = &rest[..end];
            let terminator = rest[end];
            self.rest = &rest[end + 1..];

            let is_crlf_tail =
                line.is_empty() && self.previous_was_carriage_return && terminator == b'\n';
            self.previous_was_carriage_return = terminator == b'\r';
            if !is_crlf_tail {
                return Some(line);
            }
        }
        None
    }
}

pub struct RobotsTxtTokenizer<R> {
    config: ParserConfig,
    reporter: R,
}

impl<R> RobotsTxtTokenizer<R>
where
    R: ParseReporter,
{
    pub fn new(config: ParserConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    /// Runs one full pass over `body`, bracketed by `handle_start` and
    /// `handle_end`.
    pub fn tokenize<H: ParseHandler>(&self, body: &[u8], handler: &mut H) {
        handler.handle_start();

        let bom_len = bom_prefix_len(body);
        if bom_len > 0 {
            self.reporter
                .report(ParseEvent::BomStripped { num_bytes: bom_len });
        }

        for (index, line) in Lines::new(&body[bom_len..]).enumerate() {
            if let Some(directive) = self.parse_line(line, index + 1) {
                handler.handle_directive(directive.kind, &directive.value);
            }
        }

        handler.handle_end();
    }

    /// Extracts the directive of a single line, if it has one.
    pub fn parse_line(&self, line: &[u8], line_number: usize) -> Option<Directive> {
        let limit = line.iter().position(|&b| b == b'#').unwrap_or(line.len());
        let content = &line[..limit];

        let separator = match content.iter().position(|&b| b == b':') {
            Some(separator) => separator,
            None => {
                // Blank and comment-only lines are skipped silently.
                let start = content.iter().position(|&b| !is_whitespace(b))?;
                match content[start..].iter().position(|&b| is_whitespace(b)) {
                    Some(offset) => {
                        self.reporter
                            .report(ParseEvent::WhitespaceSeparator { line_number });
                        start + offset
                    }
                    None => {
                        self.reporter.report(ParseEvent::NoSeparator { line_number });
                        return None;
                    }
                }
            }
        };

        let Some(key) = trim_whitespace(&content[..separator]) else {
            self.reporter.report(ParseEvent::NoKey { line_number });
            return None;
        };
        let key = String::from_utf8_lossy(key);

        let classification = DirectiveKind::classify(&key);
        if classification.typo_corrected {
            self.reporter.report(ParseEvent::DisallowTypoFixed {
                line_number,
                key: key.clone().into_owned(),
            });
        }
        if classification.kind == DirectiveKind::Unknown {
            self.reporter.report(ParseEvent::UnknownKey {
                line_number,
                key: key.into_owned(),
            });
        }

        match trim_whitespace(&content[separator + 1..]) {
            Some(value) => Some(Directive::new(
                classification.kind,
                self.truncate_value(value, line_number),
            )),
            None => {
                self.reporter.report(ParseEvent::NoValue { line_number });
                Some(Directive::new(DirectiveKind::Unknown, ""))
            }
        }
    }

    fn truncate_value(&self, value: &[u8], line_number: usize) -> String {
        let limit = self.config.value_limit_bytes();
        if value.len() <= limit {
            return String::from_utf8_lossy(value).into_owned();
        }

        self.reporter.report(ParseEvent::ValueTruncated {
            line_number,
            max_length_bytes: self.config.value_max_length_bytes(),
        });
        // A character split at the cut decodes as U+FFFD.
        String::from_utf8_lossy(&value[..limit]).into_owned()
    }
}
