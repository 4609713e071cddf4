use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;
use crate::analytics::AnalyticsEvent;
use crate::constants::{MAX_DETAILS_LENGTH, MAX_EVENT_TYPE_LENGTH};

static EVENT_TYPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9_]+$").expect("event type pattern is valid")
});

pub fn validate_event_type(event_type: &str) -> Result<(), ValidationError> {
    if event_type.is_empty()
        || event_type.len() > MAX_EVENT_TYPE_LENGTH
        || !EVENT_TYPE_PATTERN.is_match(event_type) {
        return Err(ValidationError::new("invalid_event_type"));
    }
    Ok(())
}

pub fn validate_details(details: &str) -> Result<(), ValidationError> {
    if details.chars().count() > MAX_DETAILS_LENGTH {
        return Err(ValidationError::new("invalid_details"));
    }
    Ok(())
}

pub fn validate_event(event: &AnalyticsEvent) -> Result<(), ValidationError> {
    validate_event_type(&event.event_type)?;
    if let Some(details) = &event.details {
        validate_details(details)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_event_types_pass() {
        for event_type in ["spin_start", "win", "header_join_click", "final_popup_claim"] {
            assert!(validate_event_type(event_type).is_ok(), "{event_type}");
        }
    }

    #[test]
    fn test_rejects_bad_event_types() {
        assert!(validate_event_type("").is_err());
        assert!(validate_event_type("Spin Start").is_err());
        assert!(validate_event_type("drop;table").is_err());
        assert!(validate_event_type(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_details_length() {
        let ok = AnalyticsEvent::new("spin_start", Some("x".repeat(256)));
        let too_long = AnalyticsEvent::new("spin_start", Some("x".repeat(257)));
        assert!(validate_event(&ok).is_ok());
        assert_eq!(validate_event(&too_long).unwrap_err().code, "invalid_details");
    }
}
