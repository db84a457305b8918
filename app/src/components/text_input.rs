use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub placeholder: String,
    #[prop_or_default]
    pub value: String,
    pub on_change: Callback<String>,
}

/// Single line text field emitting its whole value on every input.
#[function_component(TextInput)]
pub fn text_input(props: &Props) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();

        Callback::from(move |e: InputEvent| {
            let value = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value());

            if let Some(value) = value {
                on_change.emit(value);
            }
        })
    };

    html! {
        <input
            type="text"
            class="text-input"
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            oninput={oninput}
        />
    }
}
