use tracing::debug;

use crate::{Database, DbError, Question, Reply, Result, User};

impl Reply {
    pub fn find_by_id(db: &Database, id: i64) -> Result<Option<Reply>> {
        db.query_one(
            "SELECT id, question_id, parent_id, user_id, body FROM replies WHERE id = ?1",
            [id],
            Reply::from_row,
        )
    }

    pub fn find_by_user_id(db: &Database, user_id: i64) -> Result<Vec<Reply>> {
        db.query_all(
            "SELECT id, question_id, parent_id, user_id, body FROM replies
             WHERE user_id = ?1 ORDER BY id",
            [user_id],
            Reply::from_row,
        )
    }

    pub fn find_by_question_id(db: &Database, question_id: i64) -> Result<Vec<Reply>> {
        db.query_all(
            "SELECT id, question_id, parent_id, user_id, body FROM replies
             WHERE question_id = ?1 ORDER BY id",
            [question_id],
            Reply::from_row,
        )
    }

    pub fn author(&self, db: &Database) -> Result<Option<User>> {
        User::find_by_id(db, self.user_id)
    }

    pub fn question(&self, db: &Database) -> Result<Option<Question>> {
        Question::find_by_id(db, self.question_id)
    }

    /// `None` for top-level replies and for parents that no longer resolve.
    pub fn parent_reply(&self, db: &Database) -> Result<Option<Reply>> {
        match self.parent_id {
            Some(parent_id) => Reply::find_by_id(db, parent_id),
            None => Ok(None),
        }
    }

    /// Direct children only. Walking the rest of the thread is up to the caller.
    pub fn child_replies(&self, db: &Database) -> Result<Vec<Reply>> {
        let Some(id) = self.id() else {
            return Ok(vec![]);
        };

        db.query_all(
            "SELECT id, question_id, parent_id, user_id, body FROM replies
             WHERE parent_id = ?1 ORDER BY id",
            [id],
            Reply::from_row,
        )
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
            "INSERT INTO replies (question_id, parent_id, user_id, body) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![self.question_id, self.parent_id, self.user_id, self.body],
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
            "UPDATE replies SET question_id = ?1, parent_id = ?2, user_id = ?3, body = ?4
             WHERE id = ?5",
            rusqlite::params![self.question_id, self.parent_id, self.user_id, self.body, id],
        )?;
        if updated == 0 {
            return Err(DbError::NotPersisted(self.to_string()));
        }

        debug!("Updated {}", self);
        Ok(())
    }
}
