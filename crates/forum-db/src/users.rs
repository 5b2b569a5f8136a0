use tracing::debug;

use crate::{Database, DbError, Question, QuestionFollow, QuestionLike, Reply, Result, User};

impl User {
    pub fn find_by_id(db: &Database, id: i64) -> Result<Option<User>> {
        db.query_one(
            "SELECT id, fname, lname FROM users WHERE id = ?1",
            [id],
            User::from_row,
        )
    }

    /// First user with exactly this name. Which one wins when several users
    /// share a name is up to the store's row order.
    pub fn find_by_name(db: &Database, fname: &str, lname: &str) -> Result<Option<User>> {
        db.query_one(
            "SELECT id, fname, lname FROM users WHERE fname = ?1 AND lname = ?2",
            [fname, lname],
            User::from_row,
        )
    }

    pub fn authored_questions(&self, db: &Database) -> Result<Vec<Question>> {
        match self.id() {
            Some(id) => Question::find_by_author_id(db, id),
            None => Ok(vec![]),
        }
    }

    pub fn authored_replies(&self, db: &Database) -> Result<Vec<Reply>> {
        match self.id() {
            Some(id) => Reply::find_by_user_id(db, id),
            None => Ok(vec![]),
        }
    }

    pub fn followed_questions(&self, db: &Database) -> Result<Vec<Question>> {
        match self.id() {
            Some(id) => QuestionFollow::followed_questions_for_user_id(db, id),
            None => Ok(vec![]),
        }
    }

    pub fn liked_questions(&self, db: &Database) -> Result<Vec<Question>> {
        match self.id() {
            Some(id) => QuestionLike::liked_questions_for_user_id(db, id),
            None => Ok(vec![]),
        }
    }

    /// Mean like count over this user's questions that have at least one like.
    /// `None` when no such question exists.
    pub fn average_karma(&self, db: &Database) -> Result<Option<f64>> {
        let Some(id) = self.id() else {
            return Ok(None);
        };

        db.with_conn(|conn| {
            let karma = conn.query_row(
                "SELECT AVG(freq)
                 FROM (
                     SELECT COUNT(*) AS freq
                     FROM questions q
                     JOIN question_likes l ON l.question_id = q.id
                     WHERE q.author_id = ?1
                     GROUP BY q.id
                 )",
                [id],
                |row| row.get::<_, Option<f64>>(0),
            )?;
            Ok(karma)
        })
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
            "INSERT INTO users (fname, lname) VALUES (?1, ?2)",
            [&self.fname, &self.lname],
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
            "UPDATE users SET fname = ?1, lname = ?2 WHERE id = ?3",
            rusqlite::params![self.fname, self.lname, id],
        )?;
        if updated == 0 {
            return Err(DbError::NotPersisted(self.to_string()));
        }

        debug!("Updated {}", self);
        Ok(())
    }
}
