//! The user/question like join table and its reporting queries.
//!
//! Unlike the entity repositories, the reporting queries here are raw
//! joined SQL pushed to the store: they return typed report rows (names,
//! titles, counts), not entity instances. This short-circuits the
//! entity-construction path on purpose — the reports only need a couple
//! of columns from an aggregated join.
//!
//! Where a query groups by the very column it filters on, the filter is
//! written as a HAVING clause; that form is equivalent to a WHERE on the
//! ungrouped column and mirrors how the original reports were written.

use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// One row of the `question_likes` join table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionLike {
    /// Internal database ID, assigned by the store.
    pub id: i64,
    /// The liked question.
    pub question_id: Option<i64>,
    /// The user who liked it.
    pub user_id: Option<i64>,
}

/// A liker's name, as reported by [`likers_for_question_id`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikerRow {
    /// First name.
    pub fname: String,
    /// Last name.
    pub lname: String,
}

fn row_to_like(row: &Row<'_>) -> Result<QuestionLike, rusqlite::Error> {
    Ok(QuestionLike {
        id: row.get(0)?,
        question_id: row.get(1)?,
        user_id: row.get(2)?,
    })
}

/// Loads every like row, in store row order.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn all(conn: &Connection) -> Result<Vec<QuestionLike>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, question_id, user_id FROM question_likes")?;
    let likes = stmt
        .query_map([], row_to_like)?
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(count = likes.len(), "loaded question_likes table");

    Ok(likes)
}

/// Names of every user who liked the given question.
///
/// One row per like: if a user somehow liked a question twice, their
/// name appears twice. Grouping is per like row, so duplicates survive
/// the GROUP BY.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn likers_for_question_id(
    conn: &Connection,
    question_id: i64,
) -> Result<Vec<LikerRow>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT users.fname, users.lname
         FROM question_likes
         JOIN users ON users.id = question_likes.user_id
         JOIN questions ON questions.id = question_likes.question_id
         GROUP BY question_likes.id
         HAVING question_likes.question_id = ?1",
    )?;
    let likers = stmt
        .query_map(params![question_id], |row| {
            Ok(LikerRow {
                fname: row.get(0)?,
                lname: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(likers)
}

/// Titles of the questions the given user has liked.
///
/// Grouped by question, so liking the same question twice reports its
/// title once.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn liked_questions_for_user_id(
    conn: &Connection,
    user_id: i64,
) -> Result<Vec<String>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT questions.title
         FROM question_likes
         JOIN questions ON questions.id = question_likes.question_id
         WHERE question_likes.user_id = ?1
         GROUP BY question_likes.question_id",
    )?;
    let titles = stmt
        .query_map(params![user_id], |row| row.get(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(titles)
}

/// How many likes the given question has. Zero when unliked or unknown.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn num_likes_for_question_id(conn: &Connection, question_id: i64) -> Result<i64, StoreError> {
    // Grouping by the filtered column: the HAVING is equivalent to a
    // WHERE here, and the group either exists (one count row) or the
    // question has no likes at all (no rows).
    let count = conn
        .query_row(
            "SELECT COUNT(question_likes.user_id)
             FROM question_likes
             JOIN questions ON questions.id = question_likes.question_id
             GROUP BY question_likes.question_id
             HAVING question_likes.question_id = ?1",
            params![question_id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(count.unwrap_or(0))
}

/// Titles of the `n` most-liked questions, descending by like count.
///
/// Questions with no likes never appear. Ties order arbitrarily; there
/// is no secondary sort key.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn most_liked_questions(conn: &Connection, n: u32) -> Result<Vec<String>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT questions.title
         FROM question_likes
         JOIN questions ON questions.id = question_likes.question_id
         GROUP BY question_likes.question_id
         ORDER BY COUNT(question_likes.user_id) DESC
         LIMIT ?1",
    )?;
    let titles = stmt
        .query_map(params![n], |row| row.get(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(titles)
}
