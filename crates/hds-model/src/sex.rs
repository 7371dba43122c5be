//! Sex category.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed sex category of the canonical schema.
///
/// Raw sources spell sex in many ways; [`Sex::normalize`] folds the known
/// synonyms and maps everything else, including missing values, to
/// [`Sex::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
    #[default]
    Unknown,
}

const MALE_SYNONYMS: &[&str] = &["male", "m"];
const FEMALE_SYNONYMS: &[&str] = &["female", "f"];
const OTHER_SYNONYMS: &[&str] = &["other", "non-binary", "nonbinary", "nb", "third"];

impl Sex {
    /// Allowed values in the canonical `sex` column.
    pub const VALUES: &'static [&'static str] = &["male", "female", "other", "unknown"];

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
            Sex::Unknown => "unknown",
        }
    }

    /// Case-insensitive synonym lookup. Never fails.
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Sex::Unknown;
        };
        let value = raw.trim().to_lowercase();
        if MALE_SYNONYMS.contains(&value.as_str()) {
            Sex::Male
        } else if FEMALE_SYNONYMS.contains(&value.as_str()) {
            Sex::Female
        } else if OTHER_SYNONYMS.contains(&value.as_str()) {
            Sex::Other
        } else {
            Sex::Unknown
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
