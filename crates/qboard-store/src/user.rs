//! Forum members and their authored content.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::{question, question_follow, question_like, reply};

/// A forum member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Internal database ID, assigned by the store.
    pub id: i64,
    /// First name.
    pub fname: String,
    /// Last name.
    pub lname: String,
}

fn row_to_user(row: &Row<'_>) -> Result<User, rusqlite::Error> {
    Ok(User {
        id: row.get(0)?,
        fname: row.get(1)?,
        lname: row.get(2)?,
    })
}

/// Loads every user, in store row order.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn all(conn: &Connection) -> Result<Vec<User>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, fname, lname FROM users")?;
    let users = stmt
        .query_map([], row_to_user)?
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(count = users.len(), "loaded users table");

    Ok(users)
}

/// Finds users whose first and last name both match exactly.
///
/// Loads the whole table and filters in memory (case-sensitive equality),
/// preserving store row order. Unknown names yield an empty vec.
///
/// # Errors
///
/// Returns [`StoreError::Database`] on SQL failure.
pub fn find_by_name(conn: &Connection, fname: &str, lname: &str) -> Result<Vec<User>, StoreError> {
    let users = all(conn)?
        .into_iter()
        .filter(|user| user.fname == fname && user.lname == lname)
        .collect();
    Ok(users)
}

impl User {
    /// Questions this user wrote.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on SQL failure.
    pub fn authored_questions(&self, conn: &Connection) -> Result<Vec<question::Question>, StoreError> {
        question::find_by_author_id(conn, self.id)
    }

    /// Replies this user wrote.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on SQL failure.
    pub fn authored_replies(&self, conn: &Connection) -> Result<Vec<reply::Reply>, StoreError> {
        reply::find_by_user_id(conn, self.id)
    }

    /// Titles of the questions this user has liked.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on SQL failure.
    pub fn liked_questions(&self, conn: &Connection) -> Result<Vec<String>, StoreError> {
        question_like::liked_questions_for_user_id(conn, self.id)
    }

    /// Titles of the questions this user follows.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on SQL failure.
    pub fn followed_questions(&self, conn: &Connection) -> Result<Vec<String>, StoreError> {
        question_follow::followed_questions_for_user_id(conn, self.id)
    }
}
