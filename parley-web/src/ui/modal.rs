use parley_client::ModalKind;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ModalProps {
    /// Informational only, every kind renders the same
    pub kind: ModalKind,
    #[prop_or_default]
    pub header: Html,
    #[prop_or_default]
    pub children: Children,
    pub on_close: Callback<()>,
}

#[function_component(Modal)]
pub fn modal(p: &ModalProps) -> Html {
    html! {
        <div class="modal" data-kind={ p.kind.as_str() }>
            <div class="modal-container">
                <div class="modal-header">
                    { p.header.clone() }
                    <button
                        type="button"
                        class="modal-close-btn"
                        aria-label="Close"
                        onclick={ p.on_close.reform(|_| ()) }
                    >
                        { "X" }
                    </button>
                </div>

                <hr />

                <div class="modal-body">
                    { for p.children.iter() }
                </div>
            </div>
        </div>
    }
}
