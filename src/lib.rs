//! Minimal polling core: questions with a publish date, choices with vote
//! tallies, and time-gated visibility over a SQLite store.
//!
//! The crate is split the same way the data flows: [`db`] owns persistence
//! (pool construction, records, CRUD repositories) and [`service`] layers
//! the domain rules on top — which questions are visible at a given
//! instant, and how a vote lands on a choice. An HTTP front end is expected
//! to live elsewhere and translate [`PollError::NotFound`] into a 404.
//!
//! ```no_run
//! use ballotbox::{Config, service};
//! use chrono::Utc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), ballotbox::PollError> {
//! let config = Config::from_env();
//! let pool = ballotbox::init_db(&config.database_url).await?;
//!
//! let question = ballotbox::db::create_question(&pool, "What's new?", None).await?;
//! let choice = ballotbox::db::create_choice(&pool, question.id, "Not much").await?;
//!
//! service::record_vote(&pool, question.id, choice.id).await?;
//! let (question, choices) = service::results(&pool, question.id, Utc::now()).await?;
//! assert_eq!(choices[0].votes, 1);
//! println!("{}: {} choices", question.question_text, choices.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod service;

pub use config::Config;
pub use db::connection::{DbPool, init_db, init_memory_db};
pub use db::models::{Choice, MAX_TEXT_LEN, Question};
pub use error::PollError;
