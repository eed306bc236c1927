// cargo watch -x 'fmt' -x 'run'  // 'run -- 10.0.0.0/8'

pub mod batch;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use batch::{Batch, BatchSummary};
use config::Config;
use error::ParseError;
use input::InputSource;
use models::{AddressBlock, GlobPattern};
use output::Diagnostic;
use processing::{assemble, encode_range, normalize_block, select_octet_range};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

/// The result of converting one block specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The specification as it was given.
    pub input: String,
    /// The block the patterns were generated for.
    pub block: AddressBlock,
    /// Whether `block` renders differently from `input`.
    pub changed: bool,
    /// Patterns in ascending order of the varying octet.
    pub patterns: Vec<GlobPattern>,
}

impl Conversion {
    /// A warning when the block differs from the text it was parsed from.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        self.changed.then(|| Diagnostic::Changed {
            input: self.input.clone(),
            normalized: self.block,
        })
    }
}

/// Convert one CIDR block specification to glob patterns.
///
/// # Examples
/// ```
/// let conversion = cidr_glob::convert("10.0.0.0/8").unwrap();
/// assert_eq!(conversion.patterns[0].to_string(), "10.[0-9]*.[0-9]*.[0-9]*");
/// ```
pub fn convert(spec: &str) -> Result<Conversion, ParseError> {
    let normalized = normalize_block(spec)?;
    let range = select_octet_range(&normalized.block)?;
    let patterns = assemble(&range, encode_range(range.lower, range.upper));

    Ok(Conversion {
        changed: normalized.changed(),
        input: normalized.input,
        block: normalized.block,
        patterns,
    })
}

/// Run a whole batch as configured, writing patterns and diagnostics.
///
/// Returns an error only when an input or output cannot be opened, read or
/// written; invalid blocks are skipped.
pub fn run(config: &Config) -> Result<BatchSummary, Box<dyn Error>> {
    let out: Box<dyn Write> = match &config.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Cannot create output file {}: {e}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };
    let mut batch = Batch::new(out, io::stderr());

    for source in config.input_sources() {
        log::info!("Reading {source}");
        match source {
            InputSource::Args(specs) => {
                for spec in &specs {
                    batch.process(spec)?;
                }
            }
            InputSource::File(path) => {
                let file = File::open(&path)
                    .map_err(|e| format!("Cannot open input file {}: {e}", path.display()))?;
                batch.process_lines(BufReader::new(file))?;
            }
            InputSource::Stdin => batch.process_lines(io::stdin().lock())?,
        }
    }

    let summary = batch.finish()?;
    log::info!("Done: {summary}");
    Ok(summary)
}
