// citexml
// Copyright 2016 citexml developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![crate_name = "citexml"]
#![crate_type = "lib"]
#![forbid(non_camel_case_types)]
#![warn(missing_docs)]

/*!
 * Converts the plain-text table of case citation formats into XML.
 *
 * The conversion is a single pass: the text is split into content lines,
 * the lines are grouped under their section headers, the groups become an
 * element tree, and the tree is written out pretty-printed.
 *
 * ~~~
 * use citexml::{convert, HeaderPolicy, SectionNames};
 *
 * let sections = SectionNames::new(vec!["Texas"]);
 * let root = convert("Texas\nS.W.3d*\n* note", &sections, HeaderPolicy::Lenient).unwrap();
 * let section = root.get_child("Section").unwrap();
 * assert_eq!(section.get_attribute("id"), Some("Texas"));
 * assert_eq!(
 *     section.to_string(),
 *     r#"<Section id="Texas"><Citation comment="True">S.W.3d</Citation><Comment>* note</Comment></Section>"#,
 * );
 * ~~~
 */

pub use crate::config::{Config, INFILE_NAME, OUTFILE_NAME};
pub use crate::element::ChildElements;
pub use crate::element::Element;
pub use crate::error::Error;
pub use crate::parser::{preprocess, Event, HeaderPolicy, Line, Parser, ParserError};
pub use crate::sections::SectionNames;
pub use crate::table::{CitationTable, SectionGroup, TableBuilder};
pub use crate::tree::{build_tree, Citation};
pub use crate::writer::write_xml;

use std::fmt;
use std::fs;
use tracing::info;

mod config;
mod element;
mod error;
mod parser;
mod sections;
mod table;
mod tree;
mod writer;

// General functions

#[inline]
/// Escapes &, <, and > in character data with the appropriate XML entities.
pub fn escape(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            o => result.push(o),
        }
    }
    result
}

#[inline]
/// Escapes an attribute value for a double-quoted attribute.
///
/// Besides &, <, > and ", tabs and line breaks become character references
/// so a parser reads them back instead of normalizing them to spaces.
pub fn escape_attribute(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\t' => result.push_str("&#9;"),
            '\n' => result.push_str("&#10;"),
            '\r' => result.push_str("&#13;"),
            o => result.push(o),
        }
    }
    result
}

/// Runs the in-memory part of the pipeline: normalizes `text`, groups its
/// lines by section and builds the `CitationData` tree.
pub fn convert(
    text: &str,
    sections: &SectionNames,
    policy: HeaderPolicy,
) -> Result<Element, ParserError> {
    let table = CitationTable::from_lines(preprocess(text), sections, policy)?;
    Ok(build_tree(&table))
}

/// Counts reported by `run`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Summary {
    /// Number of `Section` elements written
    pub sections: usize,
    /// Number of `Citation` elements written
    pub citations: usize,
    /// Number of `Comment` elements written
    pub comments: usize,
}

/// Reads `config.input`, converts it and writes the result to `config.output`.
pub fn run(config: &Config) -> Result<Summary, Error> {
    let text = fs::read_to_string(&config.input).map_err(|source| Error::Read {
        path: config.input.clone(),
        source,
    })?;

    let table = CitationTable::from_lines(preprocess(&text), &config.sections, config.policy)?;
    let summary = table.summary();
    let root = build_tree(&table);
    write_xml(&config.output, &root)?;

    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        sections = summary.sections,
        citations = summary.citations,
        comments = summary.comments,
        "wrote citation data"
    );
    Ok(summary)
}

// General types
#[derive(Clone, PartialEq, Debug)]
/// An Enum describing a XML Node
pub enum Xml {
    /// An XML Element
    ElementNode(Element),
    /// Character Data
    CharacterNode(String),
}

impl fmt::Display for Xml {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Xml::ElementNode(ref elem) => fmt::Display::fmt(elem, f),
            Xml::CharacterNode(ref data) => write!(f, "{}", escape(data)),
        }
    }
}
