mod catalog;
mod cleanup;
mod error;
mod parser;

pub use catalog::{
    load_catalog, parse_catalog, parse_catalog_filtered, split_records, CatalogReport, NamePrefix,
    RecordFailure, TleRecord,
};
pub use cleanup::{clean_catalog, clean_catalog_file};
pub use error::{CatalogError, ParseError};
pub use parser::parse_tle;
