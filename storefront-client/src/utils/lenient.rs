//! Lenient scalar deserialization for catalog attributes
//!
//! The catalog is a hand-maintained JSON file, so the same attribute may be
//! written as `"500000"` in one record and `500000` in the next:
//! - strings are kept as-is
//! - numbers and booleans keep their JSON text (`500000`, `true`)
//! - `null` or a missing field becomes an empty string

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::String(s) => s,
            Self::I64(n) => n.to_string(),
            Self::U64(n) => n.to_string(),
            Self::F64(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

/// Deserialize a string, number, boolean or `null` into its display text.
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .unwrap_or_default())
}

/// Deserialize a list of filenames, tolerating `null` and numeric entries.
pub fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Scalar>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(Scalar::into_text)
        .collect())
}
