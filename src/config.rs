//! Command line configuration.

use crate::input::InputSource;
use clap::Parser;
use std::path::PathBuf;

const USAGE_EXAMPLES: &str = "Examples:
  cidr-glob 10.0.0.0/8 192.168.1.0/24
  cidr-glob -f blocks.txt -o globs.txt
  command | cidr-glob";

/// Convert CIDRs to glob-style patterns.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, after_help = USAGE_EXAMPLES)]
pub struct Config {
    /// CIDR blocks to convert
    #[arg(value_name = "CIDR")]
    pub cidrs: Vec<String>,

    /// Read from file instead of stdin
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write to file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// log4rs configuration, logs go to stderr when the file is missing
    #[arg(long, default_value = "log4rs.yml", value_name = "FILE")]
    pub log_config: PathBuf,
}

impl Config {
    /// Sources in processing order.
    ///
    /// Command line blocks come first, then `--file`. Stdin is only read
    /// when neither is given.
    pub fn input_sources(&self) -> Vec<InputSource> {
        let mut sources = Vec::new();
        if !self.cidrs.is_empty() {
            sources.push(InputSource::Args(self.cidrs.clone()));
        }
        match &self.input {
            Some(path) => sources.push(InputSource::File(path.clone())),
            None if sources.is_empty() => sources.push(InputSource::Stdin),
            None => {}
        }
        sources
    }
}
