use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PollError;

/// Upper bound on `question_text` and `choice_text`.
pub const MAX_TEXT_LEN: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// True iff the question was published inside the trailing 24-hour
    /// window ending at `now`. The interval is closed on both ends, so a
    /// question published exactly one day ago still counts and a future
    /// question never does.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }

    /// True iff the question is published at all, i.e. `pub_date` is not
    /// in the future relative to `now`.
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
    pub votes: i64,
}

pub(crate) fn validate_text(field: &'static str, text: &str) -> Result<(), PollError> {
    if text.is_empty() {
        return Err(PollError::Validation {
            field,
            reason: "must not be empty".to_owned(),
        });
    }
    let len = text.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(PollError::Validation {
            field,
            reason: format!("{len} characters exceeds the {MAX_TEXT_LEN} character limit"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(pub_date: DateTime<Utc>) -> Question {
        Question {
            id: 1,
            question_text: "Who is the best course director?".to_owned(),
            pub_date,
        }
    }

    #[test]
    fn future_question_was_not_published_recently() {
        let now = Utc::now();
        assert!(!question(now + Duration::days(30)).was_published_recently(now));
    }

    #[test]
    fn old_question_was_not_published_recently() {
        let now = Utc::now();
        assert!(!question(now - Duration::days(30)).was_published_recently(now));
    }

    #[test]
    fn question_published_right_now_is_recent() {
        let now = Utc::now();
        assert!(question(now).was_published_recently(now));
    }

    #[test]
    fn window_is_closed_at_one_day_ago() {
        let now = Utc::now();
        assert!(question(now - Duration::days(1)).was_published_recently(now));
        assert!(
            !question(now - Duration::days(1) - Duration::seconds(1))
                .was_published_recently(now)
        );
    }

    #[test]
    fn visibility_follows_pub_date() {
        let now = Utc::now();
        assert!(question(now).is_visible(now));
        assert!(question(now - Duration::days(2)).is_visible(now));
        assert!(!question(now + Duration::seconds(1)).is_visible(now));
    }

    #[test]
    fn text_at_the_limit_is_accepted() {
        assert!(validate_text("question_text", &"x".repeat(MAX_TEXT_LEN)).is_ok());
    }

    #[test]
    fn overlong_text_is_rejected() {
        let err = validate_text("question_text", &"x".repeat(MAX_TEXT_LEN + 1)).unwrap_err();
        assert!(matches!(err, PollError::Validation { field: "question_text", .. }));
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = validate_text("choice_text", "").unwrap_err();
        assert!(matches!(err, PollError::Validation { field: "choice_text", .. }));
    }
}
