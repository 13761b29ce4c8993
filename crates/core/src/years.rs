//! Year specification parsing: `1986`, `1993,1997`, `1980-1985`, or combinations.

use std::collections::BTreeSet;

use crate::Error;

/// Parse a year spec into a deduplicated, ascending list.
///
/// Comma-separated tokens are either a single year or an inclusive
/// `start-end` range. Blank tokens are skipped and a reversed range
/// contributes nothing.
///
/// # Errors
///
/// Returns `Error::InvalidYears` for a token that is not an integer or range,
/// and `Error::NoYears` if the spec yields no years.
pub fn parse_years(spec: &str) -> Result<Vec<i32>, Error> {
    let mut years = BTreeSet::new();

    for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match split_range(part) {
            Some((start, end)) => {
                let start = parse_year(start, part)?;
                let end = parse_year(end, part)?;
                years.extend(start..=end);
            }
            None => {
                years.insert(parse_year(part, part)?);
            }
        }
    }

    if years.is_empty() {
        return Err(Error::NoYears(spec.to_string()));
    }

    Ok(years.into_iter().collect())
}

/// Split on the first `-` that is not a leading sign.
fn split_range(part: &str) -> Option<(&str, &str)> {
    let offset = usize::from(part.starts_with('-'));
    let idx = part[offset..].find('-')? + offset;
    Some((&part[..idx], &part[idx + 1..]))
}

fn parse_year(raw: &str, part: &str) -> Result<i32, Error> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidYears(format!("{part:?} is not a year or start-end range")))
}
