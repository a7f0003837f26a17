use parley_client::{
    api::{Comment, CommentId, TopicId},
    Board, ModalKind,
};
use yew::prelude::*;

use crate::{source::GlobalSource, ui};

pub enum AppMsg {
    DisplayModal(ModalKind, Option<TopicId>),
    SetFormName(String),
    SubmitCreate,
    CloseModal,
    DeleteTopic(TopicId),

    AddComment(TopicId, Comment),
    EditComment(TopicId, CommentId, String),
    DeleteComment(TopicId, CommentId),
}

pub struct App {
    board: Board,
}

impl App {
    fn view_modal(&self, ctx: &Context<Self>) -> Option<Html> {
        let kind = self.board.modal().kind()?;
        let creating = self.board.modal().is_creating();
        let title = match creating {
            true => "Add Topic",
            false => "Edit Topic",
        };
        let header = html! { <h2>{ title }</h2> };
        Some(html! {
            <ui::Modal
                { kind }
                { header }
                on_close={ ctx.link().callback(|_| AppMsg::CloseModal) }
            >
                <ui::TopicForm
                    topic={ self.board.form().into_owned() }
                    { creating }
                    on_name_change={ ctx.link().callback(AppMsg::SetFormName) }
                    on_submit={ ctx.link().callback(|_| AppMsg::SubmitCreate) }
                />
            </ui::Modal>
        })
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            board: Board::load(&GlobalSource),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let res = match msg {
            AppMsg::DisplayModal(kind, id) => self.board.display_modal(kind, id.as_ref()),
            AppMsg::SetFormName(name) => self.board.set_form_name(name),
            AppMsg::SubmitCreate => self.board.submit_create().map(|_| ()),
            AppMsg::CloseModal => {
                self.board.close();
                Ok(())
            }
            AppMsg::DeleteTopic(id) => {
                let removed = self.board.delete_topic(&id);
                tracing::debug!(guid=?id, removed, "deleted topic");
                Ok(())
            }
            AppMsg::AddComment(topic, c) => self.board.add_comment(&topic, c),
            AppMsg::EditComment(topic, comment, text) => {
                self.board.edit_comment(&topic, comment, text)
            }
            AppMsg::DeleteComment(topic, comment) => {
                self.board.delete_comment(&topic, comment).map(|_| ())
            }
        };
        match res {
            Ok(()) => true,
            Err(e) => {
                // The view was out of date, nothing changed
                tracing::warn!(err=%e, "ignoring ui action");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_add = ctx
            .link()
            .callback(|_| AppMsg::DisplayModal(ModalKind::Add, None));
        let on_edit = ctx
            .link()
            .callback(|id| AppMsg::DisplayModal(ModalKind::Edit, Some(id)));
        let on_delete = ctx.link().callback(AppMsg::DeleteTopic);
        let on_add_comment = ctx.link().callback(|(t, c)| AppMsg::AddComment(t, c));
        let on_edit_comment = ctx
            .link()
            .callback(|(t, c, text)| AppMsg::EditComment(t, c, text));
        let on_delete_comment = ctx.link().callback(|(t, c)| AppMsg::DeleteComment(t, c));

        html! {
            <div class="container">
                <div class="app-header">
                    <h1>{ "Topics" }</h1>
                    <button
                        type="button"
                        class="button-add-topic"
                        onclick={ on_add }
                    >
                        { "Add Topic" }
                    </button>
                </div>

                <div class="topics">
                    { for self.board.topics().iter().map(|t| html! {
                        <ui::TopicView
                            key={ t.guid.0.clone() }
                            topic={ t.clone() }
                            on_edit={ on_edit.clone() }
                            on_delete={ on_delete.clone() }
                            on_add_comment={ on_add_comment.clone() }
                            on_edit_comment={ on_edit_comment.clone() }
                            on_delete_comment={ on_delete_comment.clone() }
                        />
                    }) }
                </div>

                { for self.view_modal(ctx) }
            </div>
        }
    }
}
