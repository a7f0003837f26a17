use parley_client::{
    api::{Comment, CommentId, Topic, TopicId},
    CommentForm, TopicExt,
};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct TopicViewProps {
    pub topic: Topic,
    pub on_edit: Callback<TopicId>,
    pub on_delete: Callback<TopicId>,
    pub on_add_comment: Callback<(TopicId, Comment)>,
    pub on_edit_comment: Callback<(TopicId, CommentId, String)>,
    pub on_delete_comment: Callback<(TopicId, CommentId)>,
}

#[function_component(TopicView)]
pub fn topic_view(p: &TopicViewProps) -> Html {
    let form = use_state(|| CommentForm::new(chrono::Utc::now()));
    let id = p.topic.guid.clone();

    let comments = p.topic.comments.iter().map(|c| {
        let comment_id = c.id;
        let on_edit = {
            let id = id.clone();
            p.on_edit_comment
                .reform(move |text| (id.clone(), comment_id, text))
        };
        let on_delete = {
            let id = id.clone();
            p.on_delete_comment.reform(move |_| (id.clone(), comment_id))
        };
        html! {
            <ui::CommentView
                key={ comment_id.0.to_string() }
                comment={ c.clone() }
                { on_edit }
                { on_delete }
            />
        }
    });

    html! {
        <div class="topic">
            <div>
                <p class="title">
                    <span>{ "Topic: " }</span>
                    { &p.topic.name }
                </p>
                <div class="topic-action-wrapper">
                    <div class="topic-action-button">
                        <button
                            type="button"
                            onclick={ let id = id.clone(); p.on_edit.reform(move |_| id.clone()) }
                        >
                            { "Edit Topic" }
                        </button>
                        <button
                            type="button"
                            onclick={ let id = id.clone(); p.on_delete.reform(move |_| id.clone()) }
                        >
                            { "Delete Topic" }
                        </button>
                    </div>
                </div>
            </div>

            <hr />

            <div class="comments">
                <span>{ p.topic.comment_count_label() }</span>
                { for comments }
                <hr />
                <div class="comments-footer">
                    { comment_form(form, id.clone(), &p.on_add_comment) }
                </div>
            </div>
        </div>
    }
}

fn comment_form(
    form: UseStateHandle<CommentForm>,
    topic: TopicId,
    on_add_comment: &Callback<(TopicId, Comment)>,
) -> Html {
    let on_by_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut f = (*form).clone();
            f.by = input.value();
            form.set(f);
        })
    };
    let on_comment_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            let mut f = (*form).clone();
            f.comment = input.value();
            form.set(f);
        })
    };
    let on_submit = {
        let form = form.clone();
        let on_add_comment = on_add_comment.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            let mut f = (*form).clone();
            let c = f.submit(chrono::Utc::now());
            form.set(f);
            on_add_comment.emit((topic.clone(), c));
        })
    };
    html! {
        <form class="comments-form" onsubmit={ on_submit }>
            <div class="form-group">
                <label>{ "Name: " }</label>
                <input
                    type="text"
                    class="comment-input"
                    value={ form.by.clone() }
                    oninput={ on_by_change }
                />
            </div>
            <div class="form-group">
                <label>{ "Comment: " }</label>
                <textarea
                    class="comment-textarea"
                    value={ form.comment.clone() }
                    oninput={ on_comment_change }
                />
            </div>
            <button class="button-add-comment" type="submit">{ "Add Comment" }</button>
        </form>
    }
}
