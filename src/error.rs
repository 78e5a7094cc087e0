// citexml
// Copyright 2016 citexml developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::parser::ParserError;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion run.
#[derive(Debug, Error)]
pub enum Error {
    /// The input or section list could not be read
    #[error("Couldn't read {}: {source}", .path.display())]
    Read {
        /// The file that failed
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },

    /// The output could not be written
    #[error("Couldn't write {}: {source}", .path.display())]
    Write {
        /// The file that failed
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },

    /// The input was rejected by a strict header policy
    #[error(transparent)]
    Parse(#[from] ParserError),
}
