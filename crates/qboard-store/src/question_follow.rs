//! The user/question follow join table and its reporting queries.
//!
//! Mirrors [`crate::question_like`]: entity projections for the join
//! rows, raw joined SQL for the reports. An earlier revision of the
//! forum layer left the follow reports as stubs; the queries here are
//! the complete versions.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// One row of the `question_follows` join table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionFollow {
    /// Internal database ID, assigned by the store.
    pub id: i64,
    /// The followed question.
    pub question_id: Option<i64>,
    /// The following user.
    pub user_id: Option<i64>,
}

/// A follower's name, as reported by [`followers_for_question_id`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowerRow {
    /// First name.
    pub fname: String,
    /// Last name.
    pub lname: String,
}

fn row_to_follow(row: &Row<'_>) -> Result<QuestionFollow, rusqlite::Error> {
    Ok(QuestionFollow {
        id: row.get(0)?,
        question_id: row.get(1)?,
        user_id: row.get(2)?,
    })
}

/// Loads every follow row, in store row order.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn all(conn: &Connection) -> Result<Vec<QuestionFollow>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, question_id, user_id FROM question_follows")?;
    let follows = stmt
        .query_map([], row_to_follow)?
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(count = follows.len(), "loaded question_follows table");

    Ok(follows)
}

/// Names of every user following the given question.
///
/// One row per follow; duplicate follows report duplicate names, same
/// as the like report.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn followers_for_question_id(
    conn: &Connection,
    question_id: i64,
) -> Result<Vec<FollowerRow>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT users.fname, users.lname
         FROM question_follows
         JOIN questions ON questions.id = question_follows.question_id
         JOIN users ON users.id = question_follows.user_id
         GROUP BY question_follows.id
         HAVING question_follows.question_id = ?1",
    )?;
    let followers = stmt
        .query_map(params![question_id], |row| {
            Ok(FollowerRow {
                fname: row.get(0)?,
                lname: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(followers)
}

/// Titles of the questions the given user follows.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn followed_questions_for_user_id(
    conn: &Connection,
    user_id: i64,
) -> Result<Vec<String>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT questions.title
         FROM question_follows
         JOIN questions ON questions.id = question_follows.question_id
         WHERE question_follows.user_id = ?1
         GROUP BY question_follows.question_id",
    )?;
    let titles = stmt
        .query_map(params![user_id], |row| row.get(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(titles)
}

/// Titles of the `n` most-followed questions, descending by follower
/// count.
///
/// Questions with no followers never appear. Ties order arbitrarily.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn most_followed_questions(conn: &Connection, n: u32) -> Result<Vec<String>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT questions.title
         FROM question_follows
         JOIN questions ON questions.id = question_follows.question_id
         GROUP BY question_follows.question_id
         ORDER BY COUNT(question_follows.user_id) DESC
         LIMIT ?1",
    )?;
    let titles = stmt
        .query_map(params![n], |row| row.get(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(titles)
}
