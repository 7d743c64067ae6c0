use std::fs;
use std::path::Path;

use crate::orbit::OrbitalElementSet;
use crate::tle::{parse_tle, CatalogError, ParseError};

/// The non-empty, trimmed lines belonging to one catalog entry, possibly
/// truncated.
#[derive(Debug, Clone, PartialEq)]
pub struct TleRecord {
    pub index: usize,
    pub lines: Vec<String>,
}

impl TleRecord {
    /// The name line, if the record starts with one.
    pub fn header(&self) -> Option<&str> {
        self.lines
            .first()
            .map(String::as_str)
            .filter(|l| !is_line1(l) && !is_line2(l))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordFailure {
    pub index: usize,
    pub name: Option<String>,
    pub error: ParseError,
}

/// Outcome of decoding a whole catalog. Bad records do not abort the batch.
#[derive(Debug, Clone, Default)]
pub struct CatalogReport {
    pub satellites: Vec<OrbitalElementSet>,
    pub failures: Vec<RecordFailure>,
    /// Records rejected by the name filter.
    pub skipped: usize,
}

/// Case-insensitive prefix match on a record's name line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePrefix(String);

impl NamePrefix {
    pub fn new(prefix: &str) -> Self {
        Self(prefix.to_uppercase())
    }

    pub fn matches(&self, name: &str) -> bool {
        name.to_uppercase().starts_with(&self.0)
    }
}

/// Split catalog text into records.
///
/// A record ends after its "2 " line. A name line or a second "1 " line
/// arriving before that closes the pending record early, so truncated
/// entries come out as short records instead of swallowing their neighbours.
/// Mixed 2-line and 3-line entries are fine.
pub fn split_records(content: &str) -> Vec<TleRecord> {
    let mut records = Vec::new();
    let mut current: Vec<String> = Vec::new();

    let mut flush = |current: &mut Vec<String>| {
        if !current.is_empty() {
            records.push(TleRecord {
                index: records.len(),
                lines: std::mem::take(current),
            });
        }
    };

    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_line2(line) {
            current.push(line.to_string());
            flush(&mut current);
        } else if is_line1(line) {
            if current.iter().any(|l| is_line1(l)) {
                flush(&mut current);
            }
            current.push(line.to_string());
        } else {
            flush(&mut current);
            current.push(line.to_string());
        }
    }
    flush(&mut current);

    records
}

pub fn parse_catalog(content: &str) -> CatalogReport {
    decode(split_records(content), None::<fn(&str) -> bool>)
}

/// Like [`parse_catalog`], keeping only records whose name line satisfies
/// `filter`. Records without a name line never match.
pub fn parse_catalog_filtered<F>(content: &str, filter: F) -> CatalogReport
where
    F: Fn(&str) -> bool,
{
    decode(split_records(content), Some(filter))
}

/// Read and decode a catalog file, optionally restricted to names starting
/// with `prefix`.
pub fn load_catalog(path: &Path, prefix: Option<&NamePrefix>) -> Result<CatalogReport, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let report = match prefix {
        Some(p) => parse_catalog_filtered(&content, |name| p.matches(name)),
        None => parse_catalog(&content),
    };

    for failure in &report.failures {
        log::warn!(
            "Skipping record {} ({}) in {}: {}",
            failure.index,
            failure.name.as_deref().unwrap_or("unnamed"),
            path.display(),
            failure.error
        );
    }
    log::info!(
        "Loaded {} satellites from {} ({} failed, {} filtered out)",
        report.satellites.len(),
        path.display(),
        report.failures.len(),
        report.skipped
    );

    Ok(report)
}

fn decode<F>(records: Vec<TleRecord>, filter: Option<F>) -> CatalogReport
where
    F: Fn(&str) -> bool,
{
    let mut report = CatalogReport::default();

    for record in records {
        if let Some(filter) = &filter {
            if !record.header().is_some_and(filter) {
                report.skipped += 1;
                continue;
            }
        }

        match parse_tle(&record.lines) {
            Ok(set) => report.satellites.push(set),
            Err(error) => report.failures.push(RecordFailure {
                index: record.index,
                name: record.header().map(String::from),
                error,
            }),
        }
    }

    report
}

fn is_line1(line: &str) -> bool {
    line.starts_with("1 ")
}

fn is_line2(line: &str) -> bool {
    line.starts_with("2 ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISS: &str = "ISS (ZARYA)
1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
2 25544  51.6400 208.9163 0006317  69.9862  25.2906 15.49560609123456
";

    const STARLINK: &str = "STARLINK-1007
1 44713U 19074A   24001.50000000  .00001000  00000-0  80000-4 0  9990
2 44713  53.0540 123.4567 0001423  85.1234 274.9876 15.06400531234567
";

    const HEADERLESS: &str = "1 44714U 19074B   24001.50000000  .00001000  00000-0  80000-4 0  9991
2 44714  53.0551 103.9876 0001567  90.4321 269.6789 15.06391234234561
";

    #[test]
    fn test_split_mixed_records() {
        let content = format!("{ISS}\n\n{HEADERLESS}{STARLINK}");
        let records = split_records(&content);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].lines.len(), 3);
        assert_eq!(records[0].header(), Some("ISS (ZARYA)"));
        assert_eq!(records[1].lines.len(), 2);
        assert_eq!(records[1].header(), None);
        assert_eq!(records[2].header(), Some("STARLINK-1007"));
        assert_eq!(records[2].index, 2);
    }

    #[test]
    fn test_split_truncated_records() {
        let content = format!("LOST-SAT\n{STARLINK}DANGLING\n1 99999U\n{HEADERLESS}");
        let records = split_records(&content);
        let sizes: Vec<_> = records.iter().map(|r| r.lines.len()).collect();
        assert_eq!(sizes, vec![1, 3, 2, 2]);
        assert_eq!(records[2].header(), Some("DANGLING"));
    }

    #[test]
    fn test_partial_failure() {
        let content = format!("{ISS}BROKEN-SAT\n");
        let report = parse_catalog(&content);
        assert_eq!(report.satellites.len(), 1);
        assert_eq!(report.satellites[0].name(), "ISS (ZARYA)");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 1);
        assert_eq!(report.failures[0].name.as_deref(), Some("BROKEN-SAT"));
        assert_eq!(report.failures[0].error, ParseError::TooFewLines(1));
    }

    #[test]
    fn test_name_line_without_line2_fails() {
        let content = "HALF-SAT\n1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927\n";
        let report = parse_catalog(content);
        assert!(report.satellites.is_empty());
        assert_eq!(report.failures[0].error, ParseError::MissingLine2);
    }

    #[test]
    fn test_name_line_without_line1_fails() {
        let content = format!(
            "LOST-LINE1\n2 25544  51.6400 208.9163 0006317  69.9862  25.2906 15.49560609123456\n{STARLINK}"
        );
        let report = parse_catalog(&content);
        assert_eq!(report.satellites.len(), 1);
        assert_eq!(report.satellites[0].name(), "STARLINK-1007");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].name.as_deref(), Some("LOST-LINE1"));
        assert_eq!(report.failures[0].error, ParseError::MissingLine1);

        let report = parse_catalog_filtered(&content, |name| name.starts_with("LOST"));
        assert!(report.satellites.is_empty());
        assert_eq!(report.failures[0].error, ParseError::MissingLine1);
    }

    #[test]
    fn test_prefix_filter_skips_without_error() {
        let content = format!("{ISS}{STARLINK}{HEADERLESS}");
        let prefix = NamePrefix::new("starlink");
        let report = parse_catalog_filtered(&content, |name| prefix.matches(name));
        assert_eq!(report.satellites.len(), 1);
        assert_eq!(report.satellites[0].name(), "STARLINK-1007");
        assert_eq!(report.skipped, 2);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_filter_applies_before_parsing() {
        let content = format!("{STARLINK}GARBAGE\n");
        let report = parse_catalog_filtered(&content, |name| name.starts_with("STARLINK"));
        assert_eq!(report.satellites.len(), 1);
        assert!(report.failures.is_empty());
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_name_prefix_case_insensitive() {
        let prefix = NamePrefix::new("Starlink");
        assert!(prefix.matches("STARLINK-30000"));
        assert!(prefix.matches("starlink-1"));
        assert!(!prefix.matches("ONEWEB-0012"));
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/catalog.tle"), None).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn test_empty_catalog() {
        let report = parse_catalog("\n   \n");
        assert!(report.satellites.is_empty());
        assert!(report.failures.is_empty());
    }
}
