//! Structural validation of homework API responses.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Structural validation failures in an API payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Unexpected response shape: JSON object expected")]
    NotAnObject,

    #[error("Response is missing the \"{0}\" key")]
    MissingKey(&'static str),

    #[error("The \"homeworks\" value is not an array")]
    NotAnArray,

    #[error("No verdict mapped for homework status \"{0}\"")]
    UnknownStatus(String),
}

/// Validates the top-level response and extracts the homework records.
///
/// # Errors
///
/// Returns [`ShapeError::NotAnObject`] when the payload is not a JSON
/// object, [`ShapeError::MissingKey`] when the `homeworks` key is absent,
/// and [`ShapeError::NotAnArray`] when it is present but not an array.
pub fn check_response(response: &Value) -> Result<&[Value], ShapeError> {
    let map = response.as_object().ok_or(ShapeError::NotAnObject)?;

    let homeworks = map
        .get("homeworks")
        .ok_or(ShapeError::MissingKey("homeworks"))?;

    let homeworks = homeworks.as_array().ok_or(ShapeError::NotAnArray)?;

    debug!("Response contains {} homework record(s)", homeworks.len());
    Ok(homeworks)
}

/// Computes the next poll cursor from a validated response.
///
/// The server reports the time of its answer in `current_date`; polling
/// resumes from there so each cycle covers a disjoint window. When the
/// field is absent or not an integer the previous cursor is kept, which
/// re-queries the same window instead of silently resetting to epoch.
#[must_use]
pub fn advance_cursor(response: &Value, current: i64) -> i64 {
    response
        .get("current_date")
        .and_then(Value::as_i64)
        .unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_response_accepts_homework_list() {
        let response = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1_700_000_000,
        });

        let homeworks = check_response(&response).expect("valid response");
        assert_eq!(homeworks.len(), 1);
    }

    #[test]
    fn test_check_response_accepts_empty_list() {
        let response = json!({"homeworks": [], "current_date": 1});
        let homeworks = check_response(&response).expect("valid response");
        assert!(homeworks.is_empty());
    }

    #[test]
    fn test_check_response_rejects_non_object() {
        let response = json!(["not", "a", "mapping"]);
        assert_eq!(check_response(&response), Err(ShapeError::NotAnObject));
    }

    #[test]
    fn test_check_response_rejects_missing_key() {
        let response = json!({"current_date": 1});
        assert_eq!(
            check_response(&response),
            Err(ShapeError::MissingKey("homeworks"))
        );
    }

    #[test]
    fn test_check_response_rejects_non_array_homeworks() {
        let response = json!({"homeworks": {"oops": true}});
        assert_eq!(check_response(&response), Err(ShapeError::NotAnArray));
    }

    #[test]
    fn test_advance_cursor_uses_server_time() {
        let response = json!({"homeworks": [], "current_date": 1_700_000_042});
        assert_eq!(advance_cursor(&response, 5), 1_700_000_042);
    }

    #[test]
    fn test_advance_cursor_keeps_previous_without_server_time() {
        let response = json!({"homeworks": []});
        assert_eq!(advance_cursor(&response, 5), 5);
    }

    #[test]
    fn test_advance_cursor_ignores_non_integer_server_time() {
        let response = json!({"homeworks": [], "current_date": "soon"});
        assert_eq!(advance_cursor(&response, 7), 7);
    }
}
