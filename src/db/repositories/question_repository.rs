use chrono::{DateTime, Utc};
use tracing::debug;

use crate::db::connection::DbPool;
use crate::db::models::{Question, validate_text};
use crate::error::PollError;

/// Inserts a new question. When `pub_date` is omitted it defaults to the
/// creation instant, matching the first-save behavior of the domain.
pub async fn create_question(
    pool: &DbPool,
    text: &str,
    pub_date: Option<DateTime<Utc>>,
) -> Result<Question, PollError> {
    validate_text("question_text", text)?;
    let pub_date = pub_date.unwrap_or_else(Utc::now);

    let result = sqlx::query("INSERT INTO question (question_text, pub_date) VALUES (?1, ?2)")
        .bind(text)
        .bind(pub_date)
        .execute(pool)
        .await?;

    let question = Question {
        id: result.last_insert_rowid(),
        question_text: text.to_owned(),
        pub_date,
    };
    debug!("created question {}", question.id);
    Ok(question)
}

pub async fn get_question(pool: &DbPool, id: i64) -> Result<Question, PollError> {
    sqlx::query_as::<_, Question>("SELECT id, question_text, pub_date FROM question WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(PollError::NotFound)
}

/// All questions, most recently published first. The optional cutoff keeps
/// anything published after it out of the listing.
pub async fn list_questions(
    pool: &DbPool,
    published_no_later_than: Option<DateTime<Utc>>,
) -> Result<Vec<Question>, PollError> {
    let rows = match published_no_later_than {
        Some(cutoff) => {
            sqlx::query_as::<_, Question>(
                "SELECT id, question_text, pub_date FROM question \
                 WHERE pub_date <= ?1 ORDER BY pub_date DESC",
            )
            .bind(cutoff)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Question>(
                "SELECT id, question_text, pub_date FROM question ORDER BY pub_date DESC",
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows)
}

pub async fn save_question(pool: &DbPool, question: &Question) -> Result<(), PollError> {
    validate_text("question_text", &question.question_text)?;

    let result = sqlx::query("UPDATE question SET question_text = ?1, pub_date = ?2 WHERE id = ?3")
        .bind(&question.question_text)
        .bind(question.pub_date)
        .bind(question.id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(PollError::NotFound);
    }
    Ok(())
}

/// Removes the question; the schema cascades the delete to its choices.
pub async fn delete_question(pool: &DbPool, id: i64) -> Result<(), PollError> {
    let result = sqlx::query("DELETE FROM question WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(PollError::NotFound);
    }
    debug!("deleted question {id} and its choices");
    Ok(())
}
