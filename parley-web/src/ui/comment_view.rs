use parley_client::api::{self, Comment};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentViewProps {
    pub comment: Comment,

    /// Fired on every keystroke while editing, the text is applied right away
    pub on_edit: Callback<String>,
    pub on_delete: Callback<()>,
}

#[function_component(CommentView)]
pub fn comment_view(p: &CommentViewProps) -> Html {
    let is_active = use_state(|| false);
    let active = *is_active;

    html! {
        <div class="comment">
            <div class="comment-header">
                <span>{ "By: " }{ &p.comment.by }</span>
                <span>{ "Date: " }{ api::display_time(&p.comment.date) }</span>
            </div>
            { comment_body(p, active) }
            <div class="comment-footer">
                { button_edit_toggle(is_active) }
                <button type="button" onclick={ p.on_delete.reform(|_| ()) }>
                    { "Delete Comment" }
                </button>
            </div>
        </div>
    }
}

fn comment_body(p: &CommentViewProps, is_active: bool) -> Html {
    if !is_active {
        return html! {
            <div class="comment-body">
                <span>{ &p.comment.comment }</span>
            </div>
        };
    }
    html! {
        <div class="comment-body">
            <div class="form-group">
                <textarea
                    class="comment-textarea"
                    value={ p.comment.comment.clone() }
                    oninput={ p.on_edit.reform(|e: InputEvent| {
                        let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                        input.value()
                    }) }
                />
            </div>
        </div>
    }
}

fn button_edit_toggle(is_active: UseStateHandle<bool>) -> Html {
    // Saving only hides the editor, edits were applied as they were typed
    let (label, next) = match *is_active {
        true => ("Save", false),
        false => ("Edit Comment", true),
    };
    html! {
        <button
            type="button"
            onclick={ Callback::from(move |_| is_active.set(next)) }
        >
            { label }
        </button>
    }
}
