use std::collections::HashSet;

use bolero::generator::TypeGenerator;

use crate::{
    api::{Time, Topic, TopicId},
    Board, CommentForm, TopicExt,
};

#[derive(Clone, Debug, TypeGenerator)]
enum Op {
    OpenCreate,
    OpenEdit(u8),
    SetFormName(String),
    SubmitCreate,
    Close,
    DeleteTopic(u8),
    AddComment { topic: u8, by: String, text: String },
    EditComment { topic: u8, comment: u8, text: String },
    DeleteComment { topic: u8, comment: u8 },
    DeleteCommentAt { topic: u8, index: u8 },
}

fn nth_topic(b: &Board, n: u8) -> TopicId {
    match b.topics().len() {
        0 => TopicId(String::from("missing")),
        len => b.topics()[n as usize % len].guid.clone(),
    }
}

fn apply(b: &mut Board, op: Op, now: Time) {
    // Errors are legitimate outcomes here, only panics and broken invariants are not
    match op {
        Op::OpenCreate => b.open_create(),
        Op::OpenEdit(t) => {
            let _ = b.open_edit(&nth_topic(b, t));
        }
        Op::SetFormName(name) => {
            let _ = b.set_form_name(name);
        }
        Op::SubmitCreate => {
            let _ = b.submit_create();
        }
        Op::Close => b.close(),
        Op::DeleteTopic(t) => {
            b.delete_topic(&nth_topic(b, t));
        }
        Op::AddComment { topic, by, text } => {
            let mut form = CommentForm::new(now);
            form.by = by;
            form.comment = text;
            let _ = b.add_comment(&nth_topic(b, topic), form.submit(now));
        }
        Op::EditComment {
            topic,
            comment,
            text,
        } => {
            let id = nth_topic(b, topic);
            let cid = b
                .topic(&id)
                .filter(|t| !t.comments.is_empty())
                .map(|t| t.comments[comment as usize % t.comments.len()].id);
            if let Some(cid) = cid {
                b.edit_comment(&id, cid, text)
                    .expect("editing a comment that was just looked up");
            }
        }
        Op::DeleteComment { topic, comment } => {
            let id = nth_topic(b, topic);
            let cid = b
                .topic(&id)
                .filter(|t| !t.comments.is_empty())
                .map(|t| t.comments[comment as usize % t.comments.len()].id);
            if let Some(cid) = cid {
                b.delete_comment(&id, cid)
                    .expect("deleting a comment that was just looked up");
            }
        }
        Op::DeleteCommentAt { topic, index } => {
            let _ = b.delete_comment_at(&nth_topic(b, topic), index as usize);
        }
    }
}

fn check_invariants(b: &Board) {
    let m = b.modal();
    let flags = (m.is_open(), m.is_editing(), m.is_creating());
    assert!(
        matches!(
            flags,
            (false, false, false) | (true, true, false) | (true, false, true)
        ),
        "illegal modal state {m:?}"
    );
    if !m.is_open() {
        assert_eq!(*b.form(), Topic::blank());
    }
    if let Some(id) = m.editing() {
        assert!(b.topic(id).is_some(), "editing topic {id:?} that is gone");
    }

    let mut guids = HashSet::new();
    for t in b.topics() {
        assert!(guids.insert(&t.guid), "duplicate guid {:?}", t.guid);
        let mut comments = HashSet::new();
        for c in t.comments.iter() {
            assert!(comments.insert(c.id), "duplicate comment id {:?}", c.id);
        }
        assert_eq!(
            t.comment_count_label() == "1 Comment",
            t.comments.len() == 1
        );
    }
}

#[test]
fn board_operations_keep_invariants() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
    let now: Time = "2022-11-15T10:00:00Z"
        .parse()
        .expect("parsing test timestamp");
    bolero::check!()
        .with_type::<Vec<Op>>()
        .cloned()
        .for_each(move |ops| {
            let mut b = Board::new(vec![
                Topic::new(String::from("first")),
                Topic::new(String::from("second")),
            ]);
            for op in ops {
                apply(&mut b, op, now);
                check_invariants(&b);
            }
        })
}
