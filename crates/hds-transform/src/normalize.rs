//! Value-level normalization shared by the adapters.

use hds_model::Sex;

const TRUTHY: &[&str] = &["yes", "y", "true", "1"];
const FALSY: &[&str] = &["no", "n", "false", "0"];

/// Token whose presence marks a free-text outcome as positive.
const POSITIVE_TOKEN: &str = "pos";

/// Maps a raw sex value onto the closed category; unknown spellings become `unknown`.
pub fn normalize_sex(raw: Option<&str>) -> Sex {
    Sex::normalize(raw)
}

/// Maps yes/no style tokens to 1/0.
///
/// Unrecognized and missing values stay missing rather than defaulting to 0,
/// so an absent answer is never read as a negative one.
pub fn normalize_flag(raw: Option<&str>) -> Option<i64> {
    let value = raw?.trim().to_lowercase();
    if TRUTHY.contains(&value.as_str()) {
        Some(1)
    } else if FALSY.contains(&value.as_str()) {
        Some(0)
    } else {
        None
    }
}

/// Classifies a free-text outcome label such as `tested_positive`.
///
/// Any value containing `pos` (case-insensitive) is positive, everything else
/// is negative. This is a substring heuristic, not exact matching: a label
/// like `"no_exposure"` also counts as positive.
pub fn normalize_outcome_text(raw: &str) -> i64 {
    i64::from(raw.to_lowercase().contains(POSITIVE_TOKEN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_from_common_tokens() {
        assert_eq!(normalize_flag(Some("Yes")), Some(1));
        assert_eq!(normalize_flag(Some(" y ")), Some(1));
        assert_eq!(normalize_flag(Some("TRUE")), Some(1));
        assert_eq!(normalize_flag(Some("1")), Some(1));
        assert_eq!(normalize_flag(Some("No")), Some(0));
        assert_eq!(normalize_flag(Some("false")), Some(0));
        assert_eq!(normalize_flag(Some("0")), Some(0));
    }

    #[test]
    fn unknown_flags_stay_missing() {
        assert_eq!(normalize_flag(Some("maybe")), None);
        assert_eq!(normalize_flag(Some("")), None);
        assert_eq!(normalize_flag(None), None);
    }

    #[test]
    fn outcome_text_is_case_insensitive() {
        assert_eq!(normalize_outcome_text("tested_positive"), 1);
        assert_eq!(normalize_outcome_text("Tested_Positive"), 1);
        assert_eq!(normalize_outcome_text("TESTED_NEGATIVE"), 0);
        assert_eq!(normalize_outcome_text("tested_negative"), 0);
    }

    #[test]
    fn outcome_text_substring_heuristic() {
        // Known false positive of substring matching.
        assert_eq!(normalize_outcome_text("no_exposure"), 1);
        assert_eq!(normalize_outcome_text("diabetic"), 0);
    }

    #[test]
    fn sex_spellings() {
        assert_eq!(normalize_sex(Some("MALE")), Sex::Male);
        assert_eq!(normalize_sex(Some("f")), Sex::Female);
        assert_eq!(normalize_sex(Some("xyz")), Sex::Unknown);
    }
}
