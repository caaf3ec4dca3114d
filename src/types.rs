use serde::{Deserialize, Deserializer};

/// A single county-level election result row, mapped from the CSV header names.
///
/// Text fields are carried verbatim, including empty strings. The three vote
/// count fields go through safe-integer coercion at deserialization time, so a
/// record never fails to parse because of a blank or malformed number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ElectionRecord {
    pub state: String,
    pub county_name: String,
    #[serde(deserialize_with = "deserialize_safe_int")]
    pub year: i64,
    pub state_po: String,
    pub county_fips: String,
    pub office: String,
    pub candidate: String,
    pub party: String,
    #[serde(deserialize_with = "deserialize_safe_int")]
    pub candidatevotes: i64,
    #[serde(deserialize_with = "deserialize_safe_int")]
    pub totalvotes: i64,
    pub version: String,
    pub mode: String,
}

/// Coerce a raw CSV cell into an integer.
///
/// The source data writes vote counts both as plain integers and as floats
/// ("100" and "100.0"), and leaves some cells blank. The rule: trim whitespace,
/// parse as a float and truncate toward zero; anything blank or unparsable
/// becomes 0. This never returns an error.
pub fn safe_int(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.parse::<f64>().map(|value| value as i64).unwrap_or(0)
}

fn deserialize_safe_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(safe_int(&raw))
}
