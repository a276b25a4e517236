//! Typical per-person portion sizes, to help pick a gram weight.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

const BUILTIN_CSV: &str = include_str!("../data/serving_sizes.csv");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServingReference {
    pub food_type: String,
    pub typical_serving: String,
    pub approx_grams: String,
}

/// Parse a reference table with a `food_type,typical_serving,approx_grams` header.
pub fn parse<R: Read>(reader: R) -> Result<Vec<ServingReference>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// The table shipped with the binary.
pub fn builtin() -> Result<Vec<ServingReference>> {
    parse(BUILTIN_CSV.as_bytes())
}

/// Load a user table, or the built-in one when `path` is `None`.
pub fn load(path: Option<&Path>) -> Result<Vec<ServingReference>> {
    match path {
        Some(p) => parse(std::fs::File::open(p)?),
        None => builtin(),
    }
}
