use crate::db::connection::DbPool;
use crate::db::models::{Choice, validate_text};
use crate::db::repositories::question_repository;
use crate::error::PollError;

/// Inserts a choice attached to an existing question with a zero tally.
pub async fn create_choice(
    pool: &DbPool,
    question_id: i64,
    text: &str,
) -> Result<Choice, PollError> {
    validate_text("choice_text", text)?;
    // Surface a missing owner as NotFound rather than an FK violation.
    question_repository::get_question(pool, question_id).await?;

    let result = sqlx::query("INSERT INTO choice (question_id, choice_text) VALUES (?1, ?2)")
        .bind(question_id)
        .bind(text)
        .execute(pool)
        .await?;

    Ok(Choice {
        id: result.last_insert_rowid(),
        question_id,
        choice_text: text.to_owned(),
        votes: 0,
    })
}

/// Choices of a question in creation order.
pub async fn choices_for_question(
    pool: &DbPool,
    question_id: i64,
) -> Result<Vec<Choice>, PollError> {
    let rows = sqlx::query_as::<_, Choice>(
        "SELECT id, question_id, choice_text, votes FROM choice \
         WHERE question_id = ?1 ORDER BY id ASC",
    )
    .bind(question_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn save_choice(pool: &DbPool, choice: &Choice) -> Result<(), PollError> {
    validate_text("choice_text", &choice.choice_text)?;

    let result = sqlx::query("UPDATE choice SET choice_text = ?1, votes = ?2 WHERE id = ?3")
        .bind(&choice.choice_text)
        .bind(choice.votes)
        .bind(choice.id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(PollError::NotFound);
    }
    Ok(())
}
