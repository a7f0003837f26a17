use crate::api::{Comment, CommentId, Error, Topic};

pub trait TopicExt {
    fn comment_index(&self, id: CommentId) -> Option<usize>;
    fn add_comment(&mut self, c: Comment);
    fn edit_comment(&mut self, id: CommentId, text: String) -> Result<(), Error>;
    fn delete_comment(&mut self, id: CommentId) -> Result<Comment, Error>;
    fn delete_comment_at(&mut self, index: usize) -> Result<Comment, Error>;
    fn comment_count_label(&self) -> String;
}

impl TopicExt for Topic {
    fn comment_index(&self, id: CommentId) -> Option<usize> {
        self.comments.iter().position(|c| c.id == id)
    }

    /// Newest comments go first
    fn add_comment(&mut self, c: Comment) {
        self.comments.insert(0, c);
    }

    fn edit_comment(&mut self, id: CommentId, text: String) -> Result<(), Error> {
        let c = self
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(Error::CommentNotFound(id))?;
        c.comment = text;
        Ok(())
    }

    fn delete_comment(&mut self, id: CommentId) -> Result<Comment, Error> {
        let index = self.comment_index(id).ok_or(Error::CommentNotFound(id))?;
        Ok(self.comments.remove(index))
    }

    /// Positional delete. The index must come from the current list, a stale
    /// one removes whatever sits there now.
    fn delete_comment_at(&mut self, index: usize) -> Result<Comment, Error> {
        if index >= self.comments.len() {
            return Err(Error::CommentIndexOutOfBounds {
                index,
                len: self.comments.len(),
            });
        }
        Ok(self.comments.remove(index))
    }

    fn comment_count_label(&self) -> String {
        match self.comments.len() {
            1 => String::from("1 Comment"),
            n => format!("{n} Comments"),
        }
    }
}
