//! Translation of raw review statuses into notification text.

use serde_json::Value;
use tracing::debug;

use super::ShapeError;

/// Notification text for a poll window without any reviewed homework.
pub const NO_HOMEWORK_MESSAGE: &str = "no homework reviewed in the given interval.";

/// Fixed verdict table for the three known review statuses.
///
/// A status outside this table has no defined verdict and fails
/// validation; there is deliberately no fallback entry.
const VERDICTS: [(&str, &str); 3] = [
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// Looks up the verdict for a raw status code.
fn verdict_for(status: &str) -> Option<&'static str> {
    VERDICTS
        .iter()
        .find(|(known, _)| *known == status)
        .map(|(_, verdict)| *verdict)
}

/// Composes the notification text for a single homework record.
///
/// # Errors
///
/// Returns [`ShapeError::NotAnObject`] when the record is not a JSON
/// object, [`ShapeError::MissingKey`] when `homework_name` or `status`
/// is absent (or not a string), and [`ShapeError::UnknownStatus`] when
/// the status has no entry in the verdict table.
pub fn parse_status(homework: &Value) -> Result<String, ShapeError> {
    let record = homework.as_object().ok_or(ShapeError::NotAnObject)?;

    let homework_name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(ShapeError::MissingKey("homework_name"))?;

    let status = record
        .get("status")
        .and_then(Value::as_str)
        .ok_or(ShapeError::MissingKey("status"))?;

    let verdict =
        verdict_for(status).ok_or_else(|| ShapeError::UnknownStatus(status.to_owned()))?;

    debug!("Homework \"{}\" has status \"{}\"", homework_name, status);
    Ok(format!(
        "Changed review status for \"{homework_name}\". {verdict}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_approved_verdict_text() {
        let homework = json!({"homework_name": "bot_final", "status": "approved"});
        let text = parse_status(&homework).expect("valid record");
        assert_eq!(
            text,
            "Changed review status for \"bot_final\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_reviewing_verdict_text() {
        let homework = json!({"homework_name": "bot_final", "status": "reviewing"});
        let text = parse_status(&homework).expect("valid record");
        assert_eq!(
            text,
            "Changed review status for \"bot_final\". \
             Работа взята на проверку ревьюером."
        );
    }

    #[test]
    fn test_rejected_verdict_text() {
        let homework = json!({"homework_name": "bot_final", "status": "rejected"});
        let text = parse_status(&homework).expect("valid record");
        assert_eq!(
            text,
            "Changed review status for \"bot_final\". \
             Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let homework = json!({"homework_name": "bot_final", "status": "in_review"});
        assert_eq!(
            parse_status(&homework),
            Err(ShapeError::UnknownStatus("in_review".to_owned()))
        );
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let homework = json!({"status": "approved"});
        assert_eq!(
            parse_status(&homework),
            Err(ShapeError::MissingKey("homework_name"))
        );
    }

    #[test]
    fn test_missing_status_is_rejected() {
        let homework = json!({"homework_name": "bot_final"});
        assert_eq!(
            parse_status(&homework),
            Err(ShapeError::MissingKey("status"))
        );
    }

    #[test]
    fn test_non_object_record_is_rejected() {
        let homework = json!("approved");
        assert_eq!(parse_status(&homework), Err(ShapeError::NotAnObject));
    }
}
