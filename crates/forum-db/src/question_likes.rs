use tracing::debug;

use crate::{Database, Question, QuestionLike, Result, User};

impl QuestionLike {
    pub fn find_by_id(db: &Database, id: i64) -> Result<Option<QuestionLike>> {
        db.query_one(
            "SELECT id, user_id, question_id FROM question_likes WHERE id = ?1",
            [id],
            QuestionLike::from_row,
        )
    }

    pub fn create(db: &Database, user_id: i64, question_id: i64) -> Result<QuestionLike> {
        let id = db.insert(
            "INSERT INTO question_likes (user_id, question_id) VALUES (?1, ?2)",
            [user_id, question_id],
        )?;

        debug!("User #{} likes question #{}", user_id, question_id);
        Ok(QuestionLike {
            id,
            user_id,
            question_id,
        })
    }

    pub fn likers_for_question_id(db: &Database, question_id: i64) -> Result<Vec<User>> {
        db.query_all(
            "SELECT u.id, u.fname, u.lname
             FROM question_likes l
             JOIN users u ON l.user_id = u.id
             WHERE l.question_id = ?1
             ORDER BY l.id",
            [question_id],
            User::from_row,
        )
    }

    /// Like count for the question. The count is grouped per question, so a
    /// question nobody liked produces no row and this returns `None`.
    pub fn num_likes_for_question_id(db: &Database, question_id: i64) -> Result<Option<i64>> {
        db.query_one(
            "SELECT COUNT(*)
             FROM question_likes
             WHERE question_id = ?1
             GROUP BY question_id",
            [question_id],
            |row| row.get(0),
        )
    }

    pub fn liked_questions_for_user_id(db: &Database, user_id: i64) -> Result<Vec<Question>> {
        db.query_all(
            "SELECT q.id, q.title, q.body, q.author_id
             FROM question_likes l
             JOIN questions q ON l.question_id = q.id
             WHERE l.user_id = ?1
             ORDER BY l.id",
            [user_id],
            Question::from_row,
        )
    }

    /// The `n` most liked questions, highest count first. Questions without
    /// likes never appear; ties follow the store's row order.
    pub fn most_liked_questions(db: &Database, n: u32) -> Result<Vec<Question>> {
        db.query_all(
            "SELECT q.id, q.title, q.body, q.author_id
             FROM question_likes l
             JOIN questions q ON l.question_id = q.id
             GROUP BY l.question_id
             ORDER BY COUNT(*) DESC
             LIMIT ?1",
            [n],
            Question::from_row,
        )
    }
}
