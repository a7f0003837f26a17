mod app;
pub use app::App;

mod comment_view;
pub use comment_view::CommentView;

mod modal;
pub use modal::Modal;

mod topic_form;
pub use topic_form::TopicForm;

mod topic_view;
pub use topic_view::TopicView;
