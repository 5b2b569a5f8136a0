use rusqlite::Connection;
use tracing::info;

use crate::Result;

/// Create the forum tables if they do not exist yet. Existing tables are
/// left untouched.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id      INTEGER PRIMARY KEY,
            fname   TEXT NOT NULL,
            lname   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS questions (
            id          INTEGER PRIMARY KEY,
            title       TEXT NOT NULL,
            body        TEXT NOT NULL,
            author_id   INTEGER NOT NULL REFERENCES users(id)
        );

        CREATE INDEX IF NOT EXISTS idx_questions_author
            ON questions(author_id);

        CREATE TABLE IF NOT EXISTS replies (
            id          INTEGER PRIMARY KEY,
            question_id INTEGER NOT NULL REFERENCES questions(id),
            parent_id   INTEGER REFERENCES replies(id),
            user_id     INTEGER NOT NULL REFERENCES users(id),
            body        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_replies_question
            ON replies(question_id);

        CREATE INDEX IF NOT EXISTS idx_replies_parent
            ON replies(parent_id);

        CREATE TABLE IF NOT EXISTS question_follows (
            id          INTEGER PRIMARY KEY,
            user_id     INTEGER NOT NULL REFERENCES users(id),
            question_id INTEGER NOT NULL REFERENCES questions(id)
        );

        CREATE TABLE IF NOT EXISTS question_likes (
            id          INTEGER PRIMARY KEY,
            user_id     INTEGER NOT NULL REFERENCES users(id),
            question_id INTEGER NOT NULL REFERENCES questions(id)
        );

        CREATE INDEX IF NOT EXISTS idx_question_likes_question
            ON question_likes(question_id);
        ",
    )?;

    info!("Database schema ready");
    Ok(())
}
