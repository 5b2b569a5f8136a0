use tracing::debug;

use crate::{Database, Question, QuestionFollow, Result, User};

impl QuestionFollow {
    pub fn find_by_id(db: &Database, id: i64) -> Result<Option<QuestionFollow>> {
        db.query_one(
            "SELECT id, user_id, question_id FROM question_follows WHERE id = ?1",
            [id],
            QuestionFollow::from_row,
        )
    }

    pub fn create(db: &Database, user_id: i64, question_id: i64) -> Result<QuestionFollow> {
        let id = db.insert(
            "INSERT INTO question_follows (user_id, question_id) VALUES (?1, ?2)",
            [user_id, question_id],
        )?;

        debug!("User #{} follows question #{}", user_id, question_id);
        Ok(QuestionFollow {
            id,
            user_id,
            question_id,
        })
    }

    pub fn followers_for_question_id(db: &Database, question_id: i64) -> Result<Vec<User>> {
        db.query_all(
            "SELECT u.id, u.fname, u.lname
             FROM question_follows f
             JOIN users u ON f.user_id = u.id
             WHERE f.question_id = ?1
             ORDER BY f.id",
            [question_id],
            User::from_row,
        )
    }

    pub fn followed_questions_for_user_id(db: &Database, user_id: i64) -> Result<Vec<Question>> {
        db.query_all(
            "SELECT q.id, q.title, q.body, q.author_id
             FROM question_follows f
             JOIN questions q ON f.question_id = q.id
             WHERE f.user_id = ?1
             ORDER BY f.id",
            [user_id],
            Question::from_row,
        )
    }

    /// The `n` questions with the most followers. Ties come back in whatever
    /// order the store produces them.
    pub fn most_followed_questions(db: &Database, n: u32) -> Result<Vec<Question>> {
        db.query_all(
            "SELECT q.id, q.title, q.body, q.author_id
             FROM question_follows f
             JOIN questions q ON f.question_id = q.id
             GROUP BY f.question_id
             ORDER BY COUNT(*) DESC
             LIMIT ?1",
            [n],
            Question::from_row,
        )
    }
}
