use crate::orbit::OrbitalElementSet;
use crate::tle::ParseError;

const NORAD_ID: (usize, usize) = (2, 7);
const INCLINATION: (usize, usize) = (8, 16);
const ECCENTRICITY: (usize, usize) = (26, 33);
const MEAN_MOTION: (usize, usize) = (52, 63);

/// Decode a 2-line (line 1, line 2) or 3-line (name, line 1, line 2) TLE
/// record. Blank lines are ignored and only line 2 is decoded.
///
/// Records without a name line are named after their catalog number.
pub fn parse_tle<S: AsRef<str>>(lines: &[S]) -> Result<OrbitalElementSet, ParseError> {
    let lines: Vec<&str> = lines
        .iter()
        .map(|l| l.as_ref().trim())
        .filter(|l| !l.is_empty())
        .collect();

    let (name, line1, line2) = match lines.len() {
        0 | 1 => return Err(ParseError::TooFewLines(lines.len())),
        2 => (None, lines[0], lines[1]),
        3 => (Some(lines[0]), lines[1], lines[2]),
        n => return Err(ParseError::TooManyLines(n)),
    };

    if !line2.starts_with('2') {
        return Err(ParseError::MissingLine2);
    }
    if !line1.starts_with('1') {
        return Err(ParseError::MissingLine1);
    }

    let inclination_deg = parse_number("inclination", column(line2, INCLINATION))?;
    if !(0.0..=180.0).contains(&inclination_deg) {
        return Err(ParseError::OutOfRange {
            field: "inclination",
            value: inclination_deg,
        });
    }
    let eccentricity = parse_implied_decimal("eccentricity", column(line2, ECCENTRICITY))?;
    let mean_motion_rev_day = parse_number("mean motion", column(line2, MEAN_MOTION))?;

    let name = match name {
        Some(n) => n.to_string(),
        None => format!("NORAD {}", column(line2, NORAD_ID).trim()),
    };

    Ok(OrbitalElementSet::from_tle_units(
        name,
        inclination_deg,
        eccentricity,
        mean_motion_rev_day,
    )?)
}

/// Fixed column range `[start, end)`, clamped to the line length.
fn column(line: &str, (start, end): (usize, usize)) -> &str {
    line.get(start..end.min(line.len())).unwrap_or("")
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidField {
        field,
        value: raw.to_string(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Digits-only field with an implied leading "0.".
fn parse_implied_decimal(field: &'static str, raw: &str) -> Result<f64, ParseError> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidField {
            field,
            value: raw.to_string(),
        });
    }
    parse_number(field, &format!("0.{digits}"))
}
