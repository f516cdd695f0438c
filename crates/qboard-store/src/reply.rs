//! Replies, including the self-referencing parent/child thread structure.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::{question, user};

/// A reply to a question, optionally nested under another reply.
///
/// Replies form a forest: `parent_rep` is NULL for top-level replies and
/// otherwise points at another reply on the same question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reply {
    /// Internal database ID, assigned by the store.
    pub id: i64,
    /// Reply body text.
    pub body: String,
    /// Parent reply ID; NULL for top-level replies.
    pub parent_rep: Option<i64>,
    /// The question this reply belongs to.
    pub question_id: Option<i64>,
    /// The reply author's user ID.
    pub user_id: Option<i64>,
}

fn row_to_reply(row: &Row<'_>) -> Result<Reply, rusqlite::Error> {
    Ok(Reply {
        id: row.get(0)?,
        body: row.get(1)?,
        parent_rep: row.get(2)?,
        question_id: row.get(3)?,
        user_id: row.get(4)?,
    })
}

/// Loads every reply, in store row order.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn all(conn: &Connection) -> Result<Vec<Reply>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, body, parent_rep, question_id, user_id FROM replies")?;
    let replies = stmt
        .query_map([], row_to_reply)?
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(count = replies.len(), "loaded replies table");

    Ok(replies)
}

/// Finds every reply written by the given user.
///
/// Loads the whole table and filters in memory, preserving store row
/// order.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn find_by_user_id(conn: &Connection, user_id: i64) -> Result<Vec<Reply>, StoreError> {
    let replies = all(conn)?
        .into_iter()
        .filter(|reply| reply.user_id == Some(user_id))
        .collect();
    Ok(replies)
}

/// Finds every reply on the given question.
///
/// Loads the whole table and filters in memory, preserving store row
/// order.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn find_by_question_id(conn: &Connection, question_id: i64) -> Result<Vec<Reply>, StoreError> {
    let replies = all(conn)?
        .into_iter()
        .filter(|reply| reply.question_id == Some(question_id))
        .collect();
    Ok(replies)
}

impl Reply {
    /// The user who wrote this reply.
    ///
    /// Returns the [`user::User`] entity, unlike
    /// [`question::Question::author`] which formats a display string.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `user_id` is NULL or no user
    /// has that ID, and [`StoreError::Database`] on SQL failure.
    pub fn author(&self, conn: &Connection) -> Result<user::User, StoreError> {
        user::all(conn)?
            .into_iter()
            .find(|user| Some(user.id) == self.user_id)
            .ok_or(StoreError::NotFound {
                entity: "users",
                id: self.user_id,
            })
    }

    /// The question this reply belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `question_id` is NULL or no
    /// question has that ID, and [`StoreError::Database`] on SQL failure.
    pub fn question(&self, conn: &Connection) -> Result<question::Question, StoreError> {
        question::all(conn)?
            .into_iter()
            .find(|question| Some(question.id) == self.question_id)
            .ok_or(StoreError::NotFound {
                entity: "questions",
                id: self.question_id,
            })
    }

    /// The parent reply, as a zero- or one-element vec.
    ///
    /// Matches this reply's `parent_rep` against candidate replies' own
    /// IDs. A top-level reply (NULL parent) yields an empty vec; the
    /// collection shape is the original contract of this accessor.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on SQL failure.
    pub fn parent_reply(&self, conn: &Connection) -> Result<Vec<Reply>, StoreError> {
        let parents = all(conn)?
            .into_iter()
            .filter(|candidate| self.parent_rep == Some(candidate.id))
            .collect();
        Ok(parents)
    }

    /// Replies nested directly under this one.
    ///
    /// The inverse of [`Reply::parent_reply`]: candidates whose
    /// `parent_rep` equals this reply's ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on SQL failure.
    pub fn child_replies(&self, conn: &Connection) -> Result<Vec<Reply>, StoreError> {
        let children = all(conn)?
            .into_iter()
            .filter(|candidate| candidate.parent_rep == Some(self.id))
            .collect();
        Ok(children)
    }
}
