//! Derived element files: one satellite per line, `a e i q Q` in fixed-width
//! columns.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use strum_macros::{Display, EnumString};
use thiserror::Error;
use utoipa::ToSchema;

use crate::orbit::OrbitalElementSet;

#[derive(Debug, Error)]
pub enum ElementFileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber { line: usize, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct ElementRow {
    /// Semi-major axis (km)
    pub a: f64,
    pub e: f64,
    /// Inclination (degrees)
    pub i: f64,
    /// Perigee distance (km)
    pub q: f64,
    /// Apogee distance (km)
    #[serde(rename = "Q")]
    pub big_q: f64,
}

impl From<&OrbitalElementSet> for ElementRow {
    fn from(set: &OrbitalElementSet) -> Self {
        let summary = set.summary();
        Self {
            a: summary.semi_major_axis_km,
            e: set.eccentricity(),
            i: set.inclination_deg(),
            q: summary.perigee_km,
            big_q: summary.apogee_km,
        }
    }
}

impl ElementRow {
    pub fn get(&self, key: ElementKey) -> f64 {
        match key {
            ElementKey::SemiMajorAxis => self.a,
            ElementKey::Eccentricity => self.e,
            ElementKey::Inclination => self.i,
            ElementKey::Perigee => self.q,
            ElementKey::Apogee => self.big_q,
        }
    }

    pub fn format(&self) -> String {
        format!(
            "{:10.3} {:10.7} {:10.4} {:10.3} {:10.3}",
            self.a, self.e, self.i, self.q, self.big_q
        )
    }
}

/// Column selector, spelled the way the file header abbreviates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum ElementKey {
    #[strum(serialize = "a")]
    SemiMajorAxis,
    #[strum(serialize = "e")]
    Eccentricity,
    #[strum(serialize = "i")]
    Inclination,
    #[strum(serialize = "q")]
    Perigee,
    #[strum(serialize = "Q")]
    Apogee,
}

impl ElementKey {
    pub const ALL: [ElementKey; 5] = [
        ElementKey::SemiMajorAxis,
        ElementKey::Eccentricity,
        ElementKey::Inclination,
        ElementKey::Perigee,
        ElementKey::Apogee,
    ];
}

pub fn write_rows<W: Write>(mut out: W, rows: &[ElementRow]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", row.format())?;
    }
    out.flush()
}

pub fn write_element_file(path: &Path, rows: &[ElementRow]) -> io::Result<()> {
    let file = fs::File::create(path)?;
    write_rows(io::BufWriter::new(file), rows)
}

/// Parse element file text. Lines that do not have exactly five fields are
/// skipped; a five-field line with a non-numeric value is an error.
pub fn parse_rows(content: &str) -> Result<Vec<ElementRow>, ElementFileError> {
    let mut rows = Vec::new();
    for (n, line) in content.lines().enumerate() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 5 {
            continue;
        }

        let mut values = [0.0; 5];
        for (slot, raw) in values.iter_mut().zip(&parts) {
            *slot = raw.parse().map_err(|_| ElementFileError::InvalidNumber {
                line: n + 1,
                value: raw.to_string(),
            })?;
        }
        let [a, e, i, q, big_q] = values;
        rows.push(ElementRow { a, e, i, q, big_q });
    }
    Ok(rows)
}

pub fn read_element_file(path: &Path) -> Result<Vec<ElementRow>, ElementFileError> {
    let content = fs::read_to_string(path)?;
    parse_rows(&content)
}

/// Values of one column, restricted to `[min, max]` where given.
pub fn select(rows: &[ElementRow], key: ElementKey, min: Option<f64>, max: Option<f64>) -> Vec<f64> {
    rows.iter()
        .map(|r| r.get(key))
        .filter(|v| min.map_or(true, |m| *v >= m) && max.map_or(true, |m| *v <= m))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct ColumnStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

pub fn column_stats(values: &[f64]) -> Option<ColumnStats> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Some(ColumnStats {
        count: values.len(),
        min,
        max,
        mean,
    })
}
