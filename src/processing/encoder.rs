//! Range to glob decomposition.
//!
//! Splits an interval of octet values into digit patterns by peeling partial
//! decades off both ends and recursing on the tens digit of what is left.

use crate::models::{DigitPattern, Fragment};

/// Encode `[i, j]` as an ascending list of disjoint digit patterns.
///
/// The union of the returned patterns matches exactly the decimal renderings
/// of `i..=j`. An inverted interval yields no patterns.
///
/// # Examples
/// ```
/// use cidr_glob::processing::encode_range;
/// let globs: Vec<String> = encode_range(16, 31).iter().map(|p| p.to_string()).collect();
/// assert_eq!(globs, ["1[6-9]", "2[0-9]", "3[0-1]"]);
/// ```
pub fn encode_range(i: u8, j: u8) -> Vec<DigitPattern> {
    let (mut i, mut j) = (i, j);
    let mut patterns = Vec::new();

    if i == j {
        return vec![DigitPattern::literal(i)];
    }
    if i > j {
        return patterns;
    }

    if i < 10 {
        if j < 10 {
            return vec![DigitPattern::range(i, j)];
        }
        patterns.push(DigitPattern::range(i, 9));
        i = 10;
    }

    // Leading partial decade. Intervals starting at 250 or above always end
    // inside their own decade, so `i` cannot step past 250.
    let x = i % 10;
    if x > 0 {
        let y = x + (j - i);
        if y < 10 {
            patterns.push(DigitPattern::decade(i / 10, x, y));
            return patterns;
        }
        patterns.push(DigitPattern::decade(i / 10, x, 9));
        i += 10 - x;
    }

    // Trailing partial decade; `i` is a multiple of ten from here on.
    let mut last = None;
    let y = j % 10;
    if y < 9 {
        if j - i <= y {
            patterns.push(DigitPattern::decade(j / 10, y - (j - i), y));
            return patterns;
        }
        last = Some(DigitPattern::decade(j / 10, 0, y));
        j -= y + 1;
    }

    patterns.extend(
        encode_range(i / 10, j / 10)
            .into_iter()
            .map(|p| p.followed_by(Fragment::Range(0, 9))),
    );
    patterns.extend(last);

    patterns
}
