//! Digit patterns and the glob patterns built from them.

use std::fmt;

/// Glob fragment standing for one fully free trailing octet.
pub const WILDCARD_OCTET: &str = "[0-9]*";

/// One piece of a [`DigitPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    /// A literal number, rendered in decimal.
    Literal(u8),
    /// A bracketed single-digit range `[lo-hi]`.
    Range(u8, u8),
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Fragment::Literal(n) => write!(f, "{n}"),
            Fragment::Range(lo, hi) => write!(f, "[{lo}-{hi}]"),
        }
    }
}

/// Fixed-length family of decimal strings, read left to right.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigitPattern {
    fragments: Vec<Fragment>,
}

impl DigitPattern {
    pub fn new(fragments: Vec<Fragment>) -> DigitPattern {
        DigitPattern { fragments }
    }

    pub fn literal(n: u8) -> DigitPattern {
        DigitPattern::new(vec![Fragment::Literal(n)])
    }

    pub fn range(lo: u8, hi: u8) -> DigitPattern {
        DigitPattern::new(vec![Fragment::Range(lo, hi)])
    }

    /// `<tens>[lo-hi]`: part of a single decade.
    pub fn decade(tens: u8, lo: u8, hi: u8) -> DigitPattern {
        DigitPattern::new(vec![Fragment::Literal(tens), Fragment::Range(lo, hi)])
    }

    /// This pattern with `fragment` appended.
    pub fn followed_by(mut self, fragment: Fragment) -> DigitPattern {
        self.fragments.push(fragment);
        self
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Whether `s` is one of the strings this pattern denotes.
    pub fn matches(&self, s: &str) -> bool {
        let mut rest = s;
        for fragment in &self.fragments {
            match fragment {
                Fragment::Literal(n) => match rest.strip_prefix(n.to_string().as_str()) {
                    Some(tail) => rest = tail,
                    None => return false,
                },
                Fragment::Range(lo, hi) => {
                    let mut chars = rest.chars();
                    match chars.next().and_then(|c| c.to_digit(10)) {
                        Some(d) if (u32::from(*lo)..=u32::from(*hi)).contains(&d) => {
                            rest = chars.as_str()
                        }
                        _ => return false,
                    }
                }
            }
        }
        rest.is_empty()
    }

    /// Every octet value whose decimal rendering this pattern matches.
    pub fn values(&self) -> Vec<u8> {
        (0..=u8::MAX)
            .filter(|n| self.matches(&n.to_string()))
            .collect()
    }
}

impl From<Fragment> for DigitPattern {
    fn from(fragment: Fragment) -> DigitPattern {
        DigitPattern::new(vec![fragment])
    }
}

impl fmt::Display for DigitPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}

/// A dotted four-field glob: fixed octets, one variable octet, wildcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    pub fixed: Vec<u8>,
    pub variable: DigitPattern,
    pub wildcards: usize,
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for octet in &self.fixed {
            write!(f, "{octet}.")?;
        }
        write!(f, "{}", self.variable)?;
        for _ in 0..self.wildcards {
            write!(f, ".{WILDCARD_OCTET}")?;
        }
        Ok(())
    }
}
