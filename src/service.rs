//! Domain rules layered over the store: which questions a caller may see,
//! and how votes land on a choice.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::db::connection::DbPool;
use crate::db::models::{Choice, Question};
use crate::db::repositories::{choice_repository, question_repository, vote_repository};
use crate::error::PollError;

/// Shown by the index view when no published question exists.
pub const NO_POLLS_AVAILABLE: &str = "No polls are available.";

/// Shown by the results view for a question without choices.
pub const NO_CHOICES_AVAILABLE: &str = "This question has no options.";

/// Every question already published at `now`, most recent first.
pub async fn list_visible_questions(
    pool: &DbPool,
    now: DateTime<Utc>,
) -> Result<Vec<Question>, PollError> {
    question_repository::list_questions(pool, Some(now)).await
}

/// A question that does not exist and one that is not yet published are
/// indistinguishable to the caller: both come back as `NotFound`.
pub async fn get_visible_question(
    pool: &DbPool,
    id: i64,
    now: DateTime<Utc>,
) -> Result<Question, PollError> {
    let question = question_repository::get_question(pool, id).await?;
    if !question.is_visible(now) {
        return Err(PollError::NotFound);
    }
    Ok(question)
}

/// Applies one vote to `choice_id`, which must belong to `question_id`.
pub async fn record_vote(
    pool: &DbPool,
    question_id: i64,
    choice_id: i64,
) -> Result<(), PollError> {
    vote_repository::increment_votes(pool, question_id, choice_id).await?;
    info!("vote recorded: question={question_id} choice={choice_id}");
    Ok(())
}

/// The question together with its choices and current tallies, in choice
/// creation order. Gated by the same visibility rule as
/// [`get_visible_question`]; the choice list may be empty.
pub async fn results(
    pool: &DbPool,
    question_id: i64,
    now: DateTime<Utc>,
) -> Result<(Question, Vec<Choice>), PollError> {
    let question = get_visible_question(pool, question_id, now).await?;
    let choices = choice_repository::choices_for_question(pool, question_id).await?;
    Ok((question, choices))
}
