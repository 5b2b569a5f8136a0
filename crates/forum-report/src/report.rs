use forum_db::{Database, Question, QuestionFollow, User};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report {
    pub most_liked: Vec<QuestionSummary>,
    pub most_followed: Vec<QuestionSummary>,
}

#[derive(Debug, Serialize)]
pub struct QuestionSummary {
    pub question: Question,
    pub author: Option<User>,
    pub author_karma: Option<f64>,
    pub likes: i64,
    pub followers: usize,
    pub replies: usize,
}

pub fn build(db: &Database, limit: u32) -> forum_db::Result<Report> {
    let most_liked = Question::most_liked(db, limit)?
        .into_iter()
        .map(|question| summarize(db, question))
        .collect::<forum_db::Result<Vec<_>>>()?;

    let most_followed = QuestionFollow::most_followed_questions(db, limit)?
        .into_iter()
        .map(|question| summarize(db, question))
        .collect::<forum_db::Result<Vec<_>>>()?;

    Ok(Report {
        most_liked,
        most_followed,
    })
}

fn summarize(db: &Database, question: Question) -> forum_db::Result<QuestionSummary> {
    let author = question.author(db)?;
    let author_karma = match &author {
        Some(author) => author.average_karma(db)?,
        None => None,
    };

    Ok(QuestionSummary {
        author_karma,
        likes: question.num_likes(db)?.unwrap_or(0),
        followers: question.followers(db)?.len(),
        replies: question.replies(db)?.len(),
        author,
        question,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use forum_db::{QuestionLike, Reply};

    fn seeded() -> (Database, Question, Question) {
        let db = Database::open_in_memory().unwrap();
        let mut ada = User::new("Ada", "Lovelace");
        ada.save(&db).unwrap();
        let mut alan = User::new("Alan", "Turing");
        alan.save(&db).unwrap();

        let mut popular = Question::new("Halting", "Does it halt?", ada.id().unwrap());
        popular.save(&db).unwrap();
        let mut quiet = Question::new("Notes", "Note G?", alan.id().unwrap());
        quiet.save(&db).unwrap();

        QuestionLike::create(&db, alan.id().unwrap(), popular.id().unwrap()).unwrap();
        QuestionLike::create(&db, ada.id().unwrap(), popular.id().unwrap()).unwrap();
        QuestionFollow::create(&db, alan.id().unwrap(), quiet.id().unwrap()).unwrap();

        let mut reply = Reply::new(popular.id().unwrap(), None, alan.id().unwrap(), "Undecidable.");
        reply.save(&db).unwrap();

        (db, popular, quiet)
    }

    #[test]
    fn summarizes_top_questions() {
        let (db, popular, quiet) = seeded();
        let report = build(&db, 5).unwrap();

        assert_eq!(report.most_liked.len(), 1);
        let top = &report.most_liked[0];
        assert_eq!(top.question, popular);
        assert_eq!(top.likes, 2);
        assert_eq!(top.replies, 1);
        assert_eq!(top.followers, 0);
        assert_eq!(top.author_karma, Some(2.0));

        assert_eq!(report.most_followed.len(), 1);
        let followed = &report.most_followed[0];
        assert_eq!(followed.question, quiet);
        assert_eq!(followed.likes, 0);
        assert_eq!(followed.author_karma, None);
    }

    #[test]
    fn empty_store_gives_empty_report() {
        let db = Database::open_in_memory().unwrap();
        let report = build(&db, 3).unwrap();
        assert!(report.most_liked.is_empty());
        assert!(report.most_followed.is_empty());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["most_liked"], serde_json::json!([]));
    }
}
