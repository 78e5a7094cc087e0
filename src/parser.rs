// citexml
// Copyright 2016 citexml developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::sections::SectionNames;

use std::collections::VecDeque;
use thiserror::Error;
use tracing::{debug, warn};

const COMMENT_MARKER: char = '#';
const ANNOTATION_MARKER: char = '*';

#[derive(Clone, PartialEq, Eq, Debug)]
/// A trimmed, non-empty, non-comment line of the source text
pub struct Line {
    /// 1-based line number in the source text
    pub number: u32,
    /// The line with surrounding whitespace removed
    pub text: String,
}

// LF, CR, VT, FF, FS, GS, RS, NEL, LS and PS; CRLF counts as one break.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split("\r\n").flat_map(|chunk| chunk.split(is_line_break))
}

/// Splits `text` into lines, trims them and drops blank and `#` lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line, as do the vertical tab,
/// form feed, the file/group/record separators, NEL and the Unicode line
/// and paragraph separators.
pub fn preprocess(text: &str) -> Vec<Line> {
    split_lines(text)
        .zip(1..)
        .map(|(line, number)| (line.trim(), number))
        .filter(|&(line, _)| !line.starts_with(COMMENT_MARKER))
        .filter(|&(line, _)| !line.is_empty())
        .map(|(line, number)| Line {
            number,
            text: line.to_owned(),
        })
        .collect()
}

#[derive(PartialEq, Eq, Debug)]
/// Events returned by the `Parser`
pub enum Event {
    /// A section header; the following lines belong to this section
    SectionStart(String),
    /// A citation format line, trailing marker included
    Citation(String),
    /// An annotation line, leading `*` included
    Comment(String),
}

/// What to do with a first line that is not a recognized section name
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HeaderPolicy {
    /// Use the line as a section name anyway
    #[default]
    Lenient,
    /// Fail with a `ParserError`
    Strict,
}

#[derive(PartialEq, Eq, Debug, Clone, Error)]
#[error("Parse error; Line: {line}, Reason: {msg}")]
/// The structure returned when the input is rejected
pub struct ParserError {
    /// The source line number at which the error occurred
    pub line: u32,
    /// A message describing the type of the error
    pub msg: &'static str,
}

// Section cursor
enum State {
    Unset,
    Named(String),
}

/// A line classifier for the citation table
///
/// Text is fed to the parser using the `feed_str()` method.
/// The `Event`s, and `ParserError`s generated while classifying
/// can be requested by iterating over the parser.
///
/// ~~~
/// use citexml::{Event, HeaderPolicy, Parser, SectionNames};
///
/// let sections = SectionNames::new(vec!["Ohio"]);
/// let mut p = Parser::new(&sections, HeaderPolicy::Lenient);
/// p.feed_str("Ohio\nOhio St.3d\n* official reporter");
/// let events: Vec<_> = p.collect::<Result<_, _>>().unwrap();
/// assert_eq!(events[0], Event::SectionStart("Ohio".to_owned()));
/// ~~~
pub struct Parser<'a> {
    sections: &'a SectionNames,
    policy: HeaderPolicy,
    has_error: bool,
    data: VecDeque<Line>,
    st: State,
}

impl<'a> Parser<'a> {
    /// Returns a new `Parser` recognizing the headers in `sections`
    pub fn new(sections: &'a SectionNames, policy: HeaderPolicy) -> Parser<'a> {
        Parser {
            sections,
            policy,
            has_error: false,
            data: VecDeque::new(),
            st: State::Unset,
        }
    }

    /// Feeds raw source text to the `Parser`
    pub fn feed_str(&mut self, data: &str) {
        self.data.extend(preprocess(data));
    }

    /// Feeds already normalized lines to the `Parser`
    pub fn feed_lines<I: IntoIterator<Item = Line>>(&mut self, lines: I) {
        self.data.extend(lines);
    }

    fn parse_line(&mut self, line: Line) -> Result<Event, ParserError> {
        let recognized = self.sections.contains(&line.text);
        if let State::Unset = self.st {
            if !recognized {
                match self.policy {
                    HeaderPolicy::Strict => {
                        return Err(ParserError {
                            line: line.number,
                            msg: "First line is not a recognized section name",
                        });
                    }
                    HeaderPolicy::Lenient => {
                        warn!(
                            line = line.number,
                            name = %line.text,
                            "unrecognized first line used as a section name"
                        );
                    }
                }
            }
            return Ok(self.start_section(line));
        }

        if recognized {
            Ok(self.start_section(line))
        } else if line.text.starts_with(ANNOTATION_MARKER) {
            Ok(Event::Comment(line.text))
        } else {
            Ok(Event::Citation(line.text))
        }
    }

    fn start_section(&mut self, line: Line) -> Event {
        let previous = match self.st {
            State::Unset => None,
            State::Named(ref name) => Some(name.as_str()),
        };
        debug!(line = line.number, name = %line.text, ?previous, "section header");
        self.st = State::Named(line.text.clone());
        Event::SectionStart(line.text)
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<Event, ParserError>;

    fn next(&mut self) -> Option<Result<Event, ParserError>> {
        if self.has_error {
            return None;
        }

        let line = self.data.pop_front()?;
        let res = self.parse_line(line);
        if res.is_err() {
            self.has_error = true;
            self.data.clear();
        }
        Some(res)
    }
}

#[cfg(test)]
mod parser_tests {
    use super::{preprocess, Event, HeaderPolicy, Line, Parser, ParserError};
    use crate::sections::SectionNames;

    fn sections() -> SectionNames {
        SectionNames::new(vec!["California", "Texas"])
    }

    fn events(text: &str) -> Vec<Event> {
        let sections = sections();
        let mut p = Parser::new(&sections, HeaderPolicy::Lenient);
        p.feed_str(text);
        p.collect::<Result<Vec<_>, _>>().unwrap()
    }

    #[test]
    fn test_preprocess() {
        let lines = preprocess("# header\n\n  \n  California \r\n\tCal. Rptr.\n#Texas");
        assert_eq!(
            lines,
            vec![
                Line {
                    number: 4,
                    text: "California".to_owned()
                },
                Line {
                    number: 5,
                    text: "Cal. Rptr.".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_preprocess_line_breaks() {
        let texts: Vec<_> = preprocess("Texas\rS.W.3d\r* note\r")
            .into_iter()
            .map(|line| line.text)
            .collect();
        assert_eq!(texts, vec!["Texas", "S.W.3d", "* note"]);

        let lines = preprocess("A\r\nB\rC\nD\x0bE\x0cF\u{85}G\u{2028}H\u{2029}I\x1cJ");
        assert_eq!(
            lines.iter().map(|line| &line.text[..]).collect::<Vec<_>>(),
            vec!["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]
        );
        assert_eq!(
            lines.iter().map(|line| line.number).collect::<Vec<_>>(),
            (1..=10).collect::<Vec<u32>>()
        );
    }

    #[test]
    fn test_classify_cr_only_input() {
        assert_eq!(
            events("Texas\rS.W.3d\r* note\r"),
            vec![
                Event::SectionStart("Texas".to_owned()),
                Event::Citation("S.W.3d".to_owned()),
                Event::Comment("* note".to_owned()),
            ]
        );
    }

    #[test]
    fn test_preprocess_indented_comment() {
        assert!(preprocess("   # indented comment\n").is_empty());
        assert!(preprocess("").is_empty());
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            events("California\nCite A\nCite B*\n* note 1"),
            vec![
                Event::SectionStart("California".to_owned()),
                Event::Citation("Cite A".to_owned()),
                Event::Citation("Cite B*".to_owned()),
                Event::Comment("* note 1".to_owned()),
            ]
        );
    }

    #[test]
    fn test_header_must_match_exactly() {
        assert_eq!(
            events("Texas\nTexas App.\ncalifornia"),
            vec![
                Event::SectionStart("Texas".to_owned()),
                Event::Citation("Texas App.".to_owned()),
                Event::Citation("california".to_owned()),
            ]
        );
    }

    #[test]
    fn test_unrecognized_first_line() {
        assert_eq!(
            events("Not A Section\nSome Cite\nTexas"),
            vec![
                Event::SectionStart("Not A Section".to_owned()),
                Event::Citation("Some Cite".to_owned()),
                Event::SectionStart("Texas".to_owned()),
            ]
        );
    }

    #[test]
    fn test_first_line_annotation_becomes_section() {
        assert_eq!(
            events("* stray\nCite"),
            vec![
                Event::SectionStart("* stray".to_owned()),
                Event::Citation("Cite".to_owned()),
            ]
        );
    }

    #[test]
    fn test_strict_policy() {
        let sections = sections();
        let mut p = Parser::new(&sections, HeaderPolicy::Strict);
        p.feed_str("\n\nNot A Section\nSome Cite");
        assert_eq!(
            p.next(),
            Some(Err(ParserError {
                line: 3,
                msg: "First line is not a recognized section name",
            }))
        );
        assert_eq!(p.next(), None);
    }

    #[test]
    fn test_strict_policy_accepts_known_header() {
        let sections = sections();
        let mut p = Parser::new(&sections, HeaderPolicy::Strict);
        p.feed_str("Texas\nS.W.");
        assert_eq!(
            p.next(),
            Some(Ok(Event::SectionStart("Texas".to_owned())))
        );
        assert_eq!(p.next(), Some(Ok(Event::Citation("S.W.".to_owned()))));
        assert_eq!(p.next(), None);
    }

    #[test]
    fn test_error_display() {
        let err = ParserError {
            line: 7,
            msg: "First line is not a recognized section name",
        };
        assert_eq!(
            err.to_string(),
            "Parse error; Line: 7, Reason: First line is not a recognized section name"
        );
    }
}
