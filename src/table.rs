// citexml
// Copyright 2016 citexml developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::parser::{Event, HeaderPolicy, Line, Parser, ParserError};
use crate::sections::SectionNames;
use crate::Summary;

use indexmap::map::{IndexMap, Iter};

#[derive(Clone, PartialEq, Eq, Debug, Default)]
/// The lines collected under one section name
pub struct SectionGroup {
    /// Citation lines in source order, trailing `*` kept
    pub citations: Vec<String>,
    /// Annotation lines in source order, leading `*` kept
    pub comments: Vec<String>,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
/// Section groups keyed by name, in order of first appearance
pub struct CitationTable {
    sections: IndexMap<String, SectionGroup>,
}

impl CitationTable {
    /// Classifies normalized lines into a table in a single pass.
    pub fn from_lines<I>(
        lines: I,
        sections: &SectionNames,
        policy: HeaderPolicy,
    ) -> Result<CitationTable, ParserError>
    where
        I: IntoIterator<Item = Line>,
    {
        let mut p = Parser::new(sections, policy);
        let mut builder = TableBuilder::new();

        p.feed_lines(lines);
        for event in p {
            builder.handle_event(event)?;
        }
        Ok(builder.finish())
    }

    /// Returns the group for `name`, creating an empty one at the end if needed.
    pub fn section_mut(&mut self, name: &str) -> &mut SectionGroup {
        if !self.sections.contains_key(name) {
            self.sections.insert(name.to_owned(), SectionGroup::default());
        }
        &mut self.sections[name]
    }

    /// Gets the group for `name`.
    pub fn get(&self, name: &str) -> Option<&SectionGroup> {
        self.sections.get(name)
    }

    /// Iterates the groups in order of first appearance.
    pub fn iter(&self) -> Iter<'_, String, SectionGroup> {
        self.sections.iter()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no section was seen.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section, citation and comment counts.
    pub fn summary(&self) -> Summary {
        self.sections
            .values()
            .fold(Summary::default(), |mut acc, group| {
                acc.sections += 1;
                acc.citations += group.citations.len();
                acc.comments += group.comments.len();
                acc
            })
    }
}

impl<'a> IntoIterator for &'a CitationTable {
    type Item = (&'a String, &'a SectionGroup);
    type IntoIter = Iter<'a, String, SectionGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A Table Builder, collecting `Event`s as produced by `Parser` into a `CitationTable`
///
/// ~~~
/// use citexml::{HeaderPolicy, Parser, SectionNames, TableBuilder};
///
/// let sections = SectionNames::new(vec!["Utah"]);
/// let mut parser = Parser::new(&sections, HeaderPolicy::Lenient);
/// let mut builder = TableBuilder::new();
///
/// parser.feed_str("Utah\nP.3d");
/// for event in parser {
///     builder.handle_event(event).unwrap();
/// }
/// assert_eq!(builder.finish().get("Utah").unwrap().citations, vec!["P.3d"]);
/// ~~~
#[derive(Default)]
pub struct TableBuilder {
    table: CitationTable,
    current: Option<String>,
}

impl TableBuilder {
    /// Returns a new `TableBuilder`
    pub fn new() -> TableBuilder {
        TableBuilder::default()
    }

    /// Let the builder process an `Event`.
    ///
    /// A section header opens its group, or reopens it when the name was
    /// seen before. Data lines go to the group of the last header.
    pub fn handle_event(&mut self, e: Result<Event, ParserError>) -> Result<(), ParserError> {
        match e? {
            Event::SectionStart(name) => {
                self.table.section_mut(&name);
                self.current = Some(name);
            }
            Event::Citation(line) => self.current_group().citations.push(line),
            Event::Comment(line) => self.current_group().comments.push(line),
        }
        Ok(())
    }

    // The parser always opens a section before any data line; an empty
    // name only shows up when events are fed by hand.
    fn current_group(&mut self) -> &mut SectionGroup {
        let name = self.current.get_or_insert_with(String::new);
        self.table.section_mut(name)
    }

    /// Returns the collected table.
    pub fn finish(self) -> CitationTable {
        self.table
    }
}

#[cfg(test)]
mod table_tests {
    use super::{CitationTable, SectionGroup, TableBuilder};
    use crate::parser::{preprocess, Event, HeaderPolicy, ParserError};
    use crate::sections::SectionNames;
    use crate::Summary;

    fn table(text: &str) -> CitationTable {
        let sections = SectionNames::new(vec!["California", "Texas"]);
        CitationTable::from_lines(preprocess(text), &sections, HeaderPolicy::Lenient).unwrap()
    }

    fn strings(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn test_groups() {
        let t = table("California\nCite A\n* note 1\nCite B*\n* note 2");
        assert_eq!(t.len(), 1);
        assert_eq!(
            t.get("California"),
            Some(&SectionGroup {
                citations: strings(&["Cite A", "Cite B*"]),
                comments: strings(&["* note 1", "* note 2"]),
            })
        );
    }

    #[test]
    fn test_reuse_across_blocks() {
        let t = table("Texas\nTex. 1\n* t1\nCalifornia\nCal. 1\nTexas\nTex. 2\n* t2");
        assert_eq!(
            t.iter().map(|(name, _)| &name[..]).collect::<Vec<_>>(),
            vec!["Texas", "California"]
        );
        assert_eq!(
            t.get("Texas"),
            Some(&SectionGroup {
                citations: strings(&["Tex. 1", "Tex. 2"]),
                comments: strings(&["* t1", "* t2"]),
            })
        );
    }

    #[test]
    fn test_header_without_lines() {
        let t = table("Texas\nCalifornia\nCal. 1");
        assert_eq!(t.get("Texas"), Some(&SectionGroup::default()));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_empty() {
        let t = table("# only a comment\n");
        assert!(t.is_empty());
        assert_eq!(t.summary(), Summary::default());
    }

    #[test]
    fn test_summary() {
        let t = table("Texas\nTex. 1\n* t1\nCalifornia\nCal. 1\nCal. 2*");
        assert_eq!(
            t.summary(),
            Summary {
                sections: 2,
                citations: 3,
                comments: 1,
            }
        );
    }

    #[test]
    fn test_builder_stops_on_error() {
        let mut builder = TableBuilder::new();
        let err = ParserError {
            line: 1,
            msg: "First line is not a recognized section name",
        };
        assert_eq!(builder.handle_event(Err(err.clone())), Err(err));
        assert!(builder.finish().is_empty());
    }

    #[test]
    fn test_builder_without_header() {
        let mut builder = TableBuilder::new();
        builder
            .handle_event(Ok(Event::Citation("orphan".to_owned())))
            .unwrap();
        assert_eq!(builder.finish().get("").unwrap().citations, strings(&["orphan"]));
    }
}
