use std::borrow::Cow;

use crate::{
    api::{Comment, CommentId, Error, Topic, TopicId},
    load_topics, ModalKind, ModalState, TopicDraft, TopicExt, TopicSource,
};

/// Everything the page shows: the topic list and the topic modal
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Board {
    topics: Vec<Topic>,
    modal: ModalState,
    draft: TopicDraft,
}

impl Board {
    pub fn new(topics: Vec<Topic>) -> Board {
        Board {
            topics,
            modal: ModalState::Closed,
            draft: TopicDraft::default(),
        }
    }

    pub fn load(source: &dyn TopicSource) -> Board {
        Board::new(load_topics(source))
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn topic(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|t| t.guid == *id)
    }

    pub fn topic_mut(&mut self, id: &TopicId) -> Result<&mut Topic, Error> {
        self.topics
            .iter_mut()
            .find(|t| t.guid == *id)
            .ok_or_else(|| Error::TopicNotFound(id.clone()))
    }

    pub fn open_create(&mut self) {
        tracing::debug!("opening topic creation modal");
        self.draft = TopicDraft::default();
        self.modal = ModalState::Creating;
    }

    /// Open the modal on an existing topic. Form edits then apply to the
    /// topic right away, there is nothing to save or discard.
    pub fn open_edit(&mut self, id: &TopicId) -> Result<(), Error> {
        if self.topic(id).is_none() {
            return Err(Error::TopicNotFound(id.clone()));
        }
        tracing::debug!(guid=?id, "opening topic edition modal");
        self.draft = TopicDraft::default();
        self.modal = ModalState::Editing(id.clone());
        Ok(())
    }

    pub fn display_modal(&mut self, kind: ModalKind, id: Option<&TopicId>) -> Result<(), Error> {
        match (kind, id) {
            (ModalKind::Add, _) => {
                self.open_create();
                Ok(())
            }
            (ModalKind::Edit, Some(id)) => self.open_edit(id),
            (ModalKind::Edit, None) => Err(Error::TopicNotFound(TopicId::stub())),
        }
    }

    /// The topic the modal form currently displays
    pub fn form(&self) -> Cow<'_, Topic> {
        match &self.modal {
            ModalState::Closed => Cow::Owned(Topic::blank()),
            ModalState::Creating => Cow::Owned(Topic {
                name: self.draft.name.clone(),
                ..Topic::blank()
            }),
            ModalState::Editing(id) => match self.topic(id) {
                Some(t) => Cow::Borrowed(t),
                None => Cow::Owned(Topic::blank()),
            },
        }
    }

    pub fn set_form_name(&mut self, name: String) -> Result<(), Error> {
        match &self.modal {
            ModalState::Closed => {
                tracing::debug!("ignoring form edit while modal is closed");
                Ok(())
            }
            ModalState::Creating => {
                self.draft.name = name;
                Ok(())
            }
            ModalState::Editing(id) => {
                let id = id.clone();
                self.topic_mut(&id)?.name = name;
                Ok(())
            }
        }
    }

    /// Create a topic from the draft, put it first and close the modal
    pub fn submit_create(&mut self) -> Result<TopicId, Error> {
        if !self.modal.is_creating() {
            return Err(Error::NotCreating);
        }
        let draft = std::mem::take(&mut self.draft);
        let topic = Topic::new(draft.name);
        let id = topic.guid.clone();
        tracing::debug!(guid=?id, name=%topic.name, "created topic");
        self.topics.insert(0, topic);
        self.close();
        Ok(id)
    }

    pub fn close(&mut self) {
        if self.modal.is_open() {
            tracing::debug!(modal=?self.modal, "closing modal");
        }
        self.modal = ModalState::Closed;
        self.draft = TopicDraft::default();
    }

    /// Remove all topics with this guid, returning how many went away
    pub fn delete_topic(&mut self, id: &TopicId) -> usize {
        let before = self.topics.len();
        self.topics.retain(|t| t.guid != *id);
        let removed = before - self.topics.len();
        if removed > 1 {
            tracing::warn!(guid=?id, removed, "deleted several topics sharing a guid");
        }
        if removed > 0 && self.modal.editing() == Some(id) {
            self.close();
        }
        removed
    }

    pub fn add_comment(&mut self, topic: &TopicId, c: Comment) -> Result<(), Error> {
        self.topic_mut(topic)?.add_comment(c);
        Ok(())
    }

    pub fn edit_comment(
        &mut self,
        topic: &TopicId,
        comment: CommentId,
        text: String,
    ) -> Result<(), Error> {
        self.topic_mut(topic)?.edit_comment(comment, text)
    }

    pub fn delete_comment(&mut self, topic: &TopicId, comment: CommentId) -> Result<Comment, Error> {
        self.topic_mut(topic)?.delete_comment(comment)
    }

    pub fn delete_comment_at(&mut self, topic: &TopicId, index: usize) -> Result<Comment, Error> {
        self.topic_mut(topic)?.delete_comment_at(index)
    }
}
