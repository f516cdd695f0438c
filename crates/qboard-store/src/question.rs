//! Questions and their author, reply, like, and follow associations.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::{question_follow, question_like, reply, user};

/// A question posted to the forum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    /// Internal database ID, assigned by the store.
    pub id: i64,
    /// Question title.
    pub title: String,
    /// Question body text.
    pub body: String,
    /// Author's user ID. Nullable in the schema; an orphaned or NULL
    /// value makes [`Question::author`] return `NotFound`.
    pub user_id: Option<i64>,
}

fn row_to_question(row: &Row<'_>) -> Result<Question, rusqlite::Error> {
    Ok(Question {
        id: row.get(0)?,
        title: row.get(1)?,
        body: row.get(2)?,
        user_id: row.get(3)?,
    })
}

/// Loads every question, in store row order.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn all(conn: &Connection) -> Result<Vec<Question>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, title, body, user_id FROM questions")?;
    let questions = stmt
        .query_map([], row_to_question)?
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(count = questions.len(), "loaded questions table");

    Ok(questions)
}

/// Finds every question written by the given author.
///
/// Loads the whole table and filters in memory, preserving store row
/// order.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn find_by_author_id(conn: &Connection, author_id: i64) -> Result<Vec<Question>, StoreError> {
    let questions = all(conn)?
        .into_iter()
        .filter(|question| question.user_id == Some(author_id))
        .collect();
    Ok(questions)
}

impl Question {
    /// The author's display name, formatted as `"fname lname"`.
    ///
    /// Note the asymmetry with [`reply::Reply::author`], which returns
    /// the [`user::User`] entity itself; the string form here is the
    /// original contract of this accessor and is kept as-is.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `user_id` is NULL or no user
    /// has that ID, and [`StoreError::Database`] on SQL failure.
    pub fn author(&self, conn: &Connection) -> Result<String, StoreError> {
        let author = user::all(conn)?
            .into_iter()
            .find(|user| Some(user.id) == self.user_id)
            .ok_or(StoreError::NotFound {
                entity: "users",
                id: self.user_id,
            })?;
        Ok(format!("{} {}", author.fname, author.lname))
    }

    /// Replies to this question, top-level and nested alike.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on SQL failure.
    pub fn replies(&self, conn: &Connection) -> Result<Vec<reply::Reply>, StoreError> {
        reply::find_by_question_id(conn, self.id)
    }

    /// Names of every user who liked this question.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on SQL failure.
    pub fn likers(&self, conn: &Connection) -> Result<Vec<question_like::LikerRow>, StoreError> {
        question_like::likers_for_question_id(conn, self.id)
    }

    /// Number of likes on this question.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on SQL failure.
    pub fn num_likes(&self, conn: &Connection) -> Result<i64, StoreError> {
        question_like::num_likes_for_question_id(conn, self.id)
    }

    /// Names of every user following this question.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on SQL failure.
    pub fn followers(
        &self,
        conn: &Connection,
    ) -> Result<Vec<question_follow::FollowerRow>, StoreError> {
        question_follow::followers_for_question_id(conn, self.id)
    }
}
