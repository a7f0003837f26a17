use crate::api::{Comment, Time};

/// Contents of the topic creation form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TopicDraft {
    pub name: String,
}

/// Contents of a topic's add-comment form
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentForm {
    pub by: String,
    pub comment: String,

    /// Captured when the form was last reset, not at submission
    pub date: Time,
}

impl CommentForm {
    pub fn new(now: Time) -> CommentForm {
        CommentForm {
            by: String::new(),
            comment: String::new(),
            date: now,
        }
    }

    /// Turn the current contents into a comment and blank the form
    ///
    /// Empty fields are accepted as-is.
    pub fn submit(&mut self, now: Time) -> Comment {
        let form = std::mem::replace(self, CommentForm::new(now));
        Comment::new(form.by, form.comment, form.date)
    }
}
