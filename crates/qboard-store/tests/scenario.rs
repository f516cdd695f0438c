//! End-to-end scenario: pool, migrations, seed data, and the like
//! reports reached through the question entity.

use qboard_db::{create_pool, run_migrations, DbRuntimeSettings};
use qboard_store::{question, question_like, user};
use rusqlite::params;

#[test]
fn ada_likes_q1() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let db_path = dir.path().join("forum.db");
    let db_path = db_path.to_str().expect("path should be utf-8");

    let pool = create_pool(db_path, DbRuntimeSettings::default()).expect("should create pool");
    let conn = pool.get().expect("should get connection");
    run_migrations(&conn).expect("migrations should succeed");

    conn.execute(
        "INSERT INTO users (fname, lname) VALUES ('Ada', 'Lovelace')",
        [],
    )
    .expect("should insert user");
    let ada = conn.last_insert_rowid();

    conn.execute(
        "INSERT INTO questions (title, body, user_id) VALUES ('Q1', 'body', ?1)",
        params![ada],
    )
    .expect("should insert question");
    let q1 = conn.last_insert_rowid();

    conn.execute(
        "INSERT INTO question_likes (question_id, user_id) VALUES (?1, ?2)",
        params![q1, ada],
    )
    .expect("should insert like");

    // Through the module-level reports.
    assert_eq!(
        question_like::num_likes_for_question_id(&conn, q1).expect("count should succeed"),
        1
    );
    let likers =
        question_like::likers_for_question_id(&conn, q1).expect("likers should succeed");
    assert_eq!(likers.len(), 1);
    assert_eq!((likers[0].fname.as_str(), likers[0].lname.as_str()), ("Ada", "Lovelace"));

    // And through the entity accessors.
    let questions = question::all(&conn).expect("all should succeed");
    assert_eq!(questions.len(), 1);
    let q = &questions[0];

    assert_eq!(q.num_likes(&conn).expect("num_likes should succeed"), 1);
    assert_eq!(q.author(&conn).expect("author should resolve"), "Ada Lovelace");

    let likers = q.likers(&conn).expect("likers should succeed");
    assert_eq!(likers.len(), 1);
    assert_eq!(likers[0].fname, "Ada");

    // A second checkout from the pool sees the same data.
    let conn2 = pool.get().expect("should get second connection");
    let users = user::all(&conn2).expect("all should succeed");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].fname, "Ada");
}
