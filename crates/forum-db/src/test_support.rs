//! Shared fixture for the mapper tests.
//!
//! Like counts: q1 = 5, q2 = 3, q3 = 3, q4 = 0.
//! Follow counts: q3 = 3, q1 = 2, q2 = 1, q4 = 0.
//! Reply tree on q1: r1 -> {r2, r3}, r2 -> r4. r5 is a top-level reply on q3.

use crate::{Database, Question, QuestionFollow, QuestionLike, Reply, User};

pub struct Fixture {
    pub db: Database,
    pub alice: User,
    pub bob: User,
    pub carol: User,
    pub dave: User,
    pub erin: User,
    pub frank: User,
    pub q1: Question,
    pub q2: Question,
    pub q3: Question,
    pub q4: Question,
    pub r1: Reply,
    pub r2: Reply,
    pub r3: Reply,
    pub r4: Reply,
    pub r5: Reply,
}

pub fn id_of(user: &User) -> i64 {
    user.id().unwrap()
}

pub fn user(db: &Database, fname: &str, lname: &str) -> User {
    let mut user = User::new(fname, lname);
    user.create(db).unwrap();
    user
}

pub fn question(db: &Database, title: &str, author: &User) -> Question {
    let mut question = Question::new(title, format!("{} body", title), id_of(author));
    question.create(db).unwrap();
    question
}

pub fn reply(db: &Database, question: &Question, parent: Option<&Reply>, author: &User) -> Reply {
    let mut reply = Reply::new(
        question.id().unwrap(),
        parent.and_then(Reply::id),
        id_of(author),
        "reply body",
    );
    reply.create(db).unwrap();
    reply
}

fn like(db: &Database, question: &Question, users: &[&User]) {
    for user in users {
        QuestionLike::create(db, id_of(user), question.id().unwrap()).unwrap();
    }
}

fn follow(db: &Database, question: &Question, users: &[&User]) {
    for user in users {
        QuestionFollow::create(db, id_of(user), question.id().unwrap()).unwrap();
    }
}

pub fn fixture() -> Fixture {
    let db = Database::open_in_memory().unwrap();

    let alice = user(&db, "Alice", "Anders");
    let bob = user(&db, "Bob", "Brown");
    let carol = user(&db, "Carol", "Chen");
    let dave = user(&db, "Dave", "Diaz");
    let erin = user(&db, "Erin", "Evans");
    let frank = user(&db, "Frank", "Fox");

    let q1 = question(&db, "Borrowing across closures", &alice);
    let q2 = question(&db, "Lifetimes in structs", &alice);
    let q3 = question(&db, "Sizing a thread pool", &bob);
    let q4 = question(&db, "Unanswered", &carol);

    like(&db, &q1, &[&bob, &carol, &dave, &erin, &frank]);
    like(&db, &q2, &[&bob, &carol, &dave]);
    like(&db, &q3, &[&alice, &carol, &dave]);

    follow(&db, &q1, &[&bob, &carol]);
    follow(&db, &q2, &[&dave]);
    follow(&db, &q3, &[&alice, &bob, &carol]);

    let r1 = reply(&db, &q1, None, &bob);
    let r2 = reply(&db, &q1, Some(&r1), &alice);
    let r3 = reply(&db, &q1, Some(&r1), &carol);
    let r4 = reply(&db, &q1, Some(&r2), &bob);
    let r5 = reply(&db, &q3, None, &alice);

    Fixture {
        db,
        alice,
        bob,
        carol,
        dave,
        erin,
        frank,
        q1,
        q2,
        q3,
        q4,
        r1,
        r2,
        r3,
        r4,
        r5,
    }
}
