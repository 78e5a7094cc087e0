// citexml
// Copyright 2016 citexml developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::parser::HeaderPolicy;
use crate::sections::SectionNames;

use std::path::PathBuf;

/// Default input file, relative to the working directory
pub const INFILE_NAME: &str = "case_citations.txt";
/// Default output file, relative to the working directory
pub const OUTFILE_NAME: &str = "case_citations.xml";

/// Everything a conversion run needs
#[derive(Clone, Debug)]
pub struct Config {
    /// The citation table to read
    pub input: PathBuf,
    /// Where the XML document is written
    pub output: PathBuf,
    /// Names that start a section
    pub sections: SectionNames,
    /// Handling of an unrecognized first line
    pub policy: HeaderPolicy,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            input: PathBuf::from(INFILE_NAME),
            output: PathBuf::from(OUTFILE_NAME),
            sections: SectionNames::default(),
            policy: HeaderPolicy::Lenient,
        }
    }
}
