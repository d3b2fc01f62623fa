use tracing::debug;

use crate::db::connection::DbPool;
use crate::error::PollError;

/// Bumps the tally for one choice. The increment is a single UPDATE so
/// concurrent voters never lose a write to a stale read.
pub async fn increment_votes(
    pool: &DbPool,
    question_id: i64,
    choice_id: i64,
) -> Result<(), PollError> {
    let result = sqlx::query("UPDATE choice SET votes = votes + 1 WHERE id = ?1 AND question_id = ?2")
        .bind(choice_id)
        .bind(question_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        // Absent choice, absent question, and a choice owned by another
        // question all land here.
        return Err(PollError::NotFound);
    }
    debug!("vote recorded for choice {choice_id} on question {question_id}");
    Ok(())
}
