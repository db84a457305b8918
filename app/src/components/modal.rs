use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay centering its children. Clicking the backdrop calls `on_close`. Nothing is rendered
/// while closed, so children start from scratch every time the modal opens.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_card = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal" onclick={on_card}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
