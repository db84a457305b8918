use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_open_modal: Callback<()>,
}

#[function_component(Header)]
pub fn header(Props { on_open_modal }: &Props) -> Html {
    let onclick = {
        let on_open_modal = on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(()))
    };

    html! {
        <header class="header">
            <div class="center">
                <span class="brand">{ "GoRestaurant" }</span>
                <button type="button" class="button" onclick={onclick}>
                    { "New plate" }
                </button>
            </div>
        </header>
    }
}
