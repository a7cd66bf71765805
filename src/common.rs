use serde::Serialize;
use time::OffsetDateTime;

use crate::error::{AppError, AppResult};

/// `{"id": <id>}`, the body of every successful mutation.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: i32,
}

/// Trimmed `value`, or a 400 naming `field` when nothing is left.
pub fn non_blank(field: &str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

pub fn positive_id(field: &str, value: i32) -> AppResult<i32> {
    if value <= 0 {
        return Err(AppError::Validation(format!("{field} must be positive")));
    }
    Ok(value)
}

/// Ids arrive as `i64` so that values past the `SERIAL` range read as
/// missing rows instead of a path parse error.
pub fn row_id(resource: &'static str, id: i64) -> AppResult<i32> {
    i32::try_from(id).map_err(|_| AppError::NotFound(resource))
}

pub fn unix_seconds(ts: OffsetDateTime) -> i64 {
    ts.unix_timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank("name", "  user_1 ").unwrap(), "user_1");
    }

    #[test]
    fn non_blank_rejects_whitespace() {
        let err = non_blank("title", " \t\n").unwrap_err();
        assert_eq!(err.to_string(), "title must not be empty");
    }

    #[test]
    fn positive_id_rejects_zero_and_negative() {
        assert!(positive_id("user_id", 0).is_err());
        assert!(positive_id("user_id", -3).is_err());
        assert_eq!(positive_id("user_id", 1).unwrap(), 1);
    }

    #[test]
    fn row_id_out_of_range_is_not_found() {
        assert_eq!(row_id("user", 42).unwrap(), 42);
        let err = row_id("user", 3_000_000_000).unwrap_err();
        assert!(matches!(err, AppError::NotFound("user")));
        assert!(matches!(row_id("ad", i64::MIN), Err(AppError::NotFound("ad"))));
    }

    #[test]
    fn unix_seconds_drops_subsecond_part() {
        let ts = datetime!(2024-01-02 03:04:05.999 UTC);
        assert_eq!(unix_seconds(ts), 1_704_164_645);
    }
}
