// citexml
// Copyright 2016 citexml developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::Error;
use crate::parser::preprocess;

use indexmap::IndexSet;
use std::fs;
use std::path::Path;

// Federal courts first, then the states and territories, in table order.
const DEFAULT_SECTIONS: &[&str] = &[
    "Supreme Court",
    "Courts of Appeals",
    "District Courts",
    "Court of Federal Claims",
    "Bankruptcy Courts and Bankruptcy Panels",
    "Tax Court",
    "Military Service Courts of Criminal Appeals",
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "District of Columbia",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

/// The closed set of names that start a new section when a line matches one exactly.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SectionNames {
    names: IndexSet<String>,
}

impl SectionNames {
    /// Builds a set from any list of names.
    pub fn new<I, S>(names: I) -> SectionNames
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SectionNames {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses one name per line. Blank lines and lines starting with `#` are skipped.
    pub fn parse(text: &str) -> SectionNames {
        SectionNames::new(preprocess(text).into_iter().map(|line| line.text))
    }

    /// Reads a section list from a file, see `parse`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<SectionNames, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(SectionNames::parse(&text))
    }

    /// Whether `name` is exactly one of the recognized names.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of recognized names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates the names in the order they were given.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|x| &x[..])
    }
}

impl Default for SectionNames {
    /// The federal courts and U.S. jurisdictions of the citation table.
    fn default() -> SectionNames {
        SectionNames::new(DEFAULT_SECTIONS.iter().copied())
    }
}
