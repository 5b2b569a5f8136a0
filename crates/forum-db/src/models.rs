//! Forum value objects. Each one is a snapshot of a single row taken at load
//! time; later writes to the database are not reflected in it.
//!
//! Rows are decoded by column name, so a query that leaves out a column or
//! returns the wrong type fails with a decoding error instead of producing a
//! partial object.

use rusqlite::Row;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: Option<i64>,
    pub fname: String,
    pub lname: String,
}

impl User {
    pub fn new(fname: impl Into<String>, lname: impl Into<String>) -> Self {
        Self {
            id: None,
            fname: fname.into(),
            lname: lname.into(),
        }
    }

    /// Assigned by the store on `create`; `None` until then.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            fname: row.get("fname")?,
            lname: row.get("lname")?,
        })
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "User #{} ({} {})", id, self.fname, self.lname),
            None => write!(f, "unsaved User ({} {})", self.fname, self.lname),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: Option<i64>,
    pub title: String,
    pub body: String,
    pub author_id: i64,
}

impl Question {
    pub fn new(title: impl Into<String>, body: impl Into<String>, author_id: i64) -> Self {
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
            author_id,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            title: row.get("title")?,
            body: row.get("body")?,
            author_id: row.get("author_id")?,
        })
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Question #{} ({:?})", id, self.title),
            None => write!(f, "unsaved Question ({:?})", self.title),
        }
    }
}

/// A reply to a question. Replies thread through `parent_id`; top-level
/// replies have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    id: Option<i64>,
    pub question_id: i64,
    pub parent_id: Option<i64>,
    pub user_id: i64,
    pub body: String,
}

impl Reply {
    pub fn new(
        question_id: i64,
        parent_id: Option<i64>,
        user_id: i64,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            question_id,
            parent_id,
            user_id,
            body: body.into(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            question_id: row.get("question_id")?,
            parent_id: row.get("parent_id")?,
            user_id: row.get("user_id")?,
            body: row.get("body")?,
        })
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Reply #{} on question #{}", id, self.question_id),
            None => write!(f, "unsaved Reply on question #{}", self.question_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFollow {
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,
}

impl QuestionFollow {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            question_id: row.get("question_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionLike {
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,
}

impl QuestionLike {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            question_id: row.get("question_id")?,
        })
    }
}
