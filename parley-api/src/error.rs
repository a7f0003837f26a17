use crate::{CommentId, TopicId};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Malformed seed data: {0}")]
    MalformedSeed(String),

    #[error("Seed source unavailable: {0}")]
    SeedUnavailable(String),

    #[error("Topic not found {0:?}")]
    TopicNotFound(TopicId),

    #[error("Comment not found {0:?}")]
    CommentNotFound(CommentId),

    #[error("Comment index {index} is out of bounds for {len} comments")]
    CommentIndexOutOfBounds { index: usize, len: usize },

    #[error("Not currently creating a topic")]
    NotCreating,
}
