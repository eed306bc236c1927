//! Drives a sequence of block specifications through the pipeline.

use crate::convert;
use crate::input::block_specs;
use crate::output::{write_patterns, Diagnostic};
use colored::Colorize;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub inputs: usize,
    pub converted: usize,
    pub skipped: usize,
    pub warnings: usize,
    pub patterns: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} input(s): {} converted, {} skipped, {} warning(s), {} pattern(s)",
            self.inputs, self.converted, self.skipped, self.warnings, self.patterns
        )
    }
}

/// Converts block specifications one at a time, in order.
///
/// Patterns go to `out`; skip and warning lines go to `diag`. A bad
/// specification never stops the batch, only I/O errors do.
pub struct Batch<O: Write, D: Write> {
    out: O,
    diag: D,
    summary: BatchSummary,
}

impl<O: Write, D: Write> Batch<O, D> {
    pub fn new(out: O, diag: D) -> Self {
        Batch {
            out,
            diag,
            summary: BatchSummary::default(),
        }
    }

    /// Convert one specification and write its results.
    pub fn process(&mut self, spec: &str) -> io::Result<()> {
        self.summary.inputs += 1;
        log::debug!("process({spec})", spec = spec.on_blue());

        match convert(spec) {
            Ok(conversion) => {
                if let Some(warning) = conversion.diagnostic() {
                    writeln!(self.diag, "{warning}")?;
                    self.summary.warnings += 1;
                }
                self.summary.patterns += write_patterns(&mut self.out, &conversion.patterns)?;
                self.summary.converted += 1;
            }
            Err(e) => {
                log::debug!("{failed}: {e}", failed = "skipped".on_red());
                let skip = Diagnostic::Skip {
                    input: spec.to_string(),
                };
                writeln!(self.diag, "{skip}")?;
                self.summary.skipped += 1;
            }
        }
        self.out.flush()
    }

    /// Process every non-blank line of `reader`.
    pub fn process_lines<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        for spec in block_specs(reader) {
            self.process(&spec?)?;
        }
        Ok(())
    }

    pub fn summary(&self) -> BatchSummary {
        self.summary
    }

    /// Flush both sinks and return the counters.
    pub fn finish(mut self) -> io::Result<BatchSummary> {
        self.out.flush()?;
        self.diag.flush()?;
        Ok(self.summary)
    }
}
