use tracing::debug;

use crate::{Database, DbError, Question, QuestionFollow, QuestionLike, Reply, Result, User};

impl Question {
    pub fn find_by_id(db: &Database, id: i64) -> Result<Option<Question>> {
        db.query_one(
            "SELECT id, title, body, author_id FROM questions WHERE id = ?1",
            [id],
            Question::from_row,
        )
    }

    pub fn find_by_author_id(db: &Database, author_id: i64) -> Result<Vec<Question>> {
        db.query_all(
            "SELECT id, title, body, author_id FROM questions WHERE author_id = ?1 ORDER BY id",
            [author_id],
            Question::from_row,
        )
    }

    /// The single most followed question, if any question has a follower.
    pub fn most_followed(db: &Database) -> Result<Vec<Question>> {
        QuestionFollow::most_followed_questions(db, 1)
    }

    pub fn most_liked(db: &Database, n: u32) -> Result<Vec<Question>> {
        QuestionLike::most_liked_questions(db, n)
    }

    pub fn author(&self, db: &Database) -> Result<Option<User>> {
        User::find_by_id(db, self.author_id)
    }

    pub fn replies(&self, db: &Database) -> Result<Vec<Reply>> {
        match self.id() {
            Some(id) => Reply::find_by_question_id(db, id),
            None => Ok(vec![]),
        }
    }

    pub fn followers(&self, db: &Database) -> Result<Vec<User>> {
        match self.id() {
            Some(id) => QuestionFollow::followers_for_question_id(db, id),
            None => Ok(vec![]),
        }
    }

    pub fn likers(&self, db: &Database) -> Result<Vec<User>> {
        match self.id() {
            Some(id) => QuestionLike::likers_for_question_id(db, id),
            None => Ok(vec![]),
        }
    }

    /// Number of likes, or `None` when nobody liked the question.
    pub fn num_likes(&self, db: &Database) -> Result<Option<i64>> {
        match self.id() {
            Some(id) => QuestionLike::num_likes_for_question_id(db, id),
            None => Ok(None),
        }
    }

    pub fn save(&mut self, db: &Database) -> Result<()> {
        if self.id().is_some() {
            self.update(db)
        } else {
            self.create(db)
        }
    }

    pub fn create(&mut self, db: &Database) -> Result<()> {
        if self.id().is_some() {
            return Err(DbError::AlreadyPersisted(self.to_string()));
        }

        let id = db.insert(
            "INSERT INTO questions (title, body, author_id) VALUES (?1, ?2, ?3)",
            rusqlite::params![self.title, self.body, self.author_id],
        )?;
        self.set_id(id);

        debug!("Created {}", self);
        Ok(())
    }

    pub fn update(&self, db: &Database) -> Result<()> {
        let Some(id) = self.id() else {
            return Err(DbError::NotPersisted(self.to_string()));
        };

        let updated = db.update(
            "UPDATE questions SET title = ?1, body = ?2, author_id = ?3 WHERE id = ?4",
            rusqlite::params![self.title, self.body, self.author_id, id],
        )?;
        if updated == 0 {
            return Err(DbError::NotPersisted(self.to_string()));
        }

        debug!("Updated {}", self);
        Ok(())
    }
}
