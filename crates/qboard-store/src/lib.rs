//! Entity repositories for the qboard forum.
//!
//! One module per table: [`user`], [`question`], [`reply`],
//! [`question_like`], [`question_follow`]. Each module pairs a typed
//! entity record with its repository functions.
//!
//! # Query model
//!
//! Class-level lookups (`all`, `find_by_*`) load the whole table and
//! filter in memory. This is the original layer's documented behavior and
//! is kept deliberately: tables are small, there is no index use in
//! application code, and every call re-queries the store (no caching).
//! The reporting queries on the two join tables are the exception — they
//! are raw joined SQL returning typed report rows, not entities.
//!
//! Entities are read-only projections of rows; nothing in this crate
//! writes back to the store.

pub mod error;
pub mod question;
pub mod question_follow;
pub mod question_like;
pub mod reply;
pub mod user;

pub use error::StoreError;
pub use question::Question;
pub use question_follow::{FollowerRow, QuestionFollow};
pub use question_like::{LikerRow, QuestionLike};
pub use reply::Reply;
pub use user::User;
