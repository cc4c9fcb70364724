use serde::{Deserialize, Deserializer};

/// Raw contact-form submission, attacker-controlled.
///
/// String fields default to empty so an absent field surfaces as the
/// missing-fields rejection rather than a deserialization error, matching
/// what the form actually posts. `website` is the honeypot: humans never see
/// it, so any value marks the submitter as a bot.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub website: String,
    /// Client-supplied form-render time, milliseconds since epoch. The form
    /// posts it as a numeric string; `None` means absent or non-numeric.
    #[serde(rename = "_timestamp", default, deserialize_with = "timestamp_ms")]
    pub timestamp_ms: Option<i64>,
}

fn timestamp_ms<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        // Fractional or out-of-range numbers truncate; `as` saturates at the
        // i64 bounds.
        #[allow(clippy::cast_possible_truncation)]
        Some(Raw::Float(f)) => Some(f as i64),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_accepts_numeric_string() {
        let form: ContactForm = serde_json::from_str(r#"{"_timestamp": "1700000000000"}"#).unwrap();
        assert_eq!(form.timestamp_ms, Some(1_700_000_000_000));
    }

    #[test]
    fn timestamp_accepts_json_number() {
        let form: ContactForm = serde_json::from_str(r#"{"_timestamp": 1700000000000}"#).unwrap();
        assert_eq!(form.timestamp_ms, Some(1_700_000_000_000));
    }

    #[test]
    fn timestamp_accepts_fractional_number() {
        let form: ContactForm = serde_json::from_str(r#"{"_timestamp": 1.7e12}"#).unwrap();
        assert_eq!(form.timestamp_ms, Some(1_700_000_000_000));

        let form: ContactForm = serde_json::from_str(r#"{"_timestamp": 1700000000000.9}"#).unwrap();
        assert_eq!(form.timestamp_ms, Some(1_700_000_000_000));
    }

    #[test]
    fn timestamp_huge_number_saturates() {
        let form: ContactForm = serde_json::from_str(r#"{"_timestamp": 1e300}"#).unwrap();
        assert_eq!(form.timestamp_ms, Some(i64::MAX));
    }

    #[test]
    fn timestamp_non_numeric_becomes_none() {
        let form: ContactForm = serde_json::from_str(r#"{"_timestamp": "soon"}"#).unwrap();
        assert_eq!(form.timestamp_ms, None);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let form: ContactForm = serde_json::from_str("{}").unwrap();
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        assert!(form.website.is_empty());
        assert_eq!(form.timestamp_ms, None);
    }
}
