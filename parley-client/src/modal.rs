use crate::api::TopicId;

/// What the topic modal is currently being used for
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Creating,
    Editing(TopicId),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn is_creating(&self) -> bool {
        matches!(self, ModalState::Creating)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, ModalState::Editing(_))
    }

    pub fn editing(&self) -> Option<&TopicId> {
        match self {
            ModalState::Editing(id) => Some(id),
            _ => None,
        }
    }

    /// The kind to pass along to the modal shell, if it is shown
    pub fn kind(&self) -> Option<ModalKind> {
        match self {
            ModalState::Closed => None,
            ModalState::Creating => Some(ModalKind::Add),
            ModalState::Editing(_) => Some(ModalKind::Edit),
        }
    }
}

/// Purpose tag carried by the modal shell. It does not change how the shell
/// behaves or looks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModalKind {
    Add,
    Edit,
}

impl ModalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalKind::Add => "add",
            ModalKind::Edit => "edit",
        }
    }
}
