//! Where block specifications come from.

use std::fmt;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// One source of block specifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Specifications given directly on the command line.
    Args(Vec<String>),
    /// One specification per line of a file.
    File(PathBuf),
    /// One specification per line of stdin.
    Stdin,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputSource::Args(specs) => write!(f, "{} argument(s)", specs.len()),
            InputSource::File(path) => write!(f, "file {}", path.display()),
            InputSource::Stdin => write!(f, "stdin"),
        }
    }
}

/// Trimmed, non-blank lines of `reader`.
///
/// Read errors are passed through so the caller can abort the run.
pub fn block_specs<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) => {
            let spec = line.trim();
            if spec.is_empty() {
                None
            } else {
                Some(Ok(spec.to_string()))
            }
        }
        Err(e) => Some(Err(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_block_specs_skips_blank_lines() {
        let input = "10.0.0.0/8\n\n   \n192.168.1.0/24\r\n  172.16.0.0/12 \n";
        let specs: Vec<String> = block_specs(Cursor::new(input))
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(specs, ["10.0.0.0/8", "192.168.1.0/24", "172.16.0.0/12"]);
    }

    #[test]
    fn test_block_specs_empty() {
        assert_eq!(block_specs(Cursor::new("")).count(), 0);
        assert_eq!(block_specs(Cursor::new("\n\n")).count(), 0);
    }

    #[test]
    fn test_block_specs_read_error() {
        let invalid_utf8: &[u8] = &[0x31, 0x0a, 0xff, 0xfe, 0x0a];
        let results: Vec<io::Result<String>> = block_specs(invalid_utf8).collect();
        assert_eq!(results[0].as_ref().unwrap(), "1");
        assert!(results.iter().skip(1).any(|r| r.is_err()));
    }

    #[test]
    fn test_display_source() {
        assert_eq!(InputSource::Stdin.to_string(), "stdin");
        assert_eq!(
            InputSource::Args(vec!["10.0.0.0/8".to_string()]).to_string(),
            "1 argument(s)"
        );
        assert_eq!(
            InputSource::File(PathBuf::from("blocks.txt")).to_string(),
            "file blocks.txt"
        );
    }
}
