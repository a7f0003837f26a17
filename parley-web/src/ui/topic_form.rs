use parley_client::api::Topic;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct TopicFormProps {
    pub topic: Topic,
    pub creating: bool,
    pub on_name_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(TopicForm)]
pub fn topic_form(p: &TopicFormProps) -> Html {
    let onsubmit = {
        let creating = p.creating;
        let on_submit = p.on_submit.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            // edits to an existing topic are already applied
            if creating {
                on_submit.emit(());
            }
        })
    };
    let create_button = p.creating.then(|| {
        html! {
            <button type="submit" class="button-create-topic">{ "Create Topic" }</button>
        }
    });
    html! {
        <form class="topic-form" onsubmit={ onsubmit }>
            <div class="form-group">
                <label for="topic-name">{ "Name: " }</label>
                <input
                    id="topic-name"
                    type="text"
                    class="topic-input"
                    value={ p.topic.name.clone() }
                    oninput={ p.on_name_change.reform(|e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        input.value()
                    }) }
                />
            </div>
            { for create_button }
        </form>
    }
}
