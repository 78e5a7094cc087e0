// citexml
// Copyright 2016 citexml developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Converts `case_citations.txt` in the working directory into `case_citations.xml`.
//!
//! Run without arguments for the defaults; every setting can be overridden
//! with a flag or its environment variable.

use citexml::{Config, HeaderPolicy, SectionNames, INFILE_NAME, OUTFILE_NAME};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "citexml", version, about = "Convert the case citation table into XML")]
struct Cli {
    /// Citation table to read
    #[arg(long, env = "CITEXML_INPUT", default_value = INFILE_NAME)]
    input: PathBuf,

    /// XML file to write
    #[arg(long, env = "CITEXML_OUTPUT", default_value = OUTFILE_NAME)]
    output: PathBuf,

    /// File listing the section names, one per line (defaults to the built-in list)
    #[arg(long, env = "CITEXML_SECTIONS")]
    sections: Option<PathBuf>,

    /// Reject input whose first line is not a known section name
    #[arg(long)]
    strict: bool,

    /// Log progress
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<Config, citexml::Error> {
        let sections = match self.sections {
            Some(path) => SectionNames::load(path)?,
            None => SectionNames::default(),
        };
        let policy = if self.strict {
            HeaderPolicy::Strict
        } else {
            HeaderPolicy::Lenient
        };
        Ok(Config {
            input: self.input,
            output: self.output,
            sections,
            policy,
        })
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "citexml=info"
    } else {
        "citexml=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.into_config().and_then(|config| citexml::run(&config)) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
