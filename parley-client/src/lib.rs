mod board;
pub use board::Board;

mod form;
pub use form::{CommentForm, TopicDraft};

mod modal;
pub use modal::{ModalKind, ModalState};

mod source;
pub use source::{load_topics, JsonSource, StaticSource, TopicSource};

mod topic;
pub use topic::TopicExt;

#[cfg(test)]
mod fuzz;

pub mod api {
    pub use parley_api::*;
}

pub mod prelude {
    pub use crate::{TopicExt, TopicSource};
}
