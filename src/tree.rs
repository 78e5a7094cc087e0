// citexml
// Copyright 2016 citexml developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::element::Element;
use crate::table::CitationTable;

const ROOT: &str = "CitationData";
const SECTION: &str = "Section";
const CITATION: &str = "Citation";
const COMMENT: &str = "Comment";
const TRAILING_MARKER: char = '*';

#[derive(Clone, PartialEq, Eq, Debug)]
/// A citation format with its footnote flag split off
pub struct Citation {
    /// The citation text without the trailing marker
    pub text: String,
    /// Whether the line ended in `*`
    pub has_comment: bool,
}

impl Citation {
    /// Strips one trailing `*`, if present, and records that it was there.
    pub fn from_line(line: &str) -> Citation {
        match line.strip_suffix(TRAILING_MARKER) {
            Some(text) => Citation {
                text: text.to_owned(),
                has_comment: true,
            },
            None => Citation {
                text: line.to_owned(),
                has_comment: false,
            },
        }
    }

    /// The `Citation` element for this entry.
    pub fn to_element(&self) -> Element {
        let mut elem = Element::new(CITATION.to_owned(), vec![]);
        if self.has_comment {
            elem.set_attribute("comment".to_owned(), "True".to_owned());
        }
        elem.text(self.text.clone());
        elem
    }
}

/// Builds the `CitationData` tree: one `Section` per table entry, holding its
/// `Citation`s followed by its `Comment`s.
pub fn build_tree(table: &CitationTable) -> Element {
    let mut root = Element::new(ROOT.to_owned(), vec![("type".to_owned(), "case".to_owned())]);

    for (name, group) in table {
        let section = root.tag(Element::new(
            SECTION.to_owned(),
            vec![("id".to_owned(), name.clone())],
        ));
        for line in &group.citations {
            section.tag_stay(Citation::from_line(line).to_element());
        }
        for line in &group.comments {
            section.tag(Element::new(COMMENT.to_owned(), vec![])).text(line.clone());
        }
    }
    root
}
