use crate::components::{FoodForm, Modal};
use models::FoodInput;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub is_open: bool,
    pub on_toggle: Callback<()>,
    pub on_add_food: Callback<FoodInput>,
}

#[function_component(ModalAddFood)]
pub fn modal_add_food(props: &Props) -> Html {
    let on_submit = {
        let on_add_food = props.on_add_food.clone();
        let on_toggle = props.on_toggle.clone();

        Callback::from(move |input: FoodInput| {
            on_add_food.emit(input);
            on_toggle.emit(());
        })
    };

    html! {
        <Modal is_open={props.is_open} on_close={props.on_toggle.clone()}>
            <FoodForm title="New plate" submit_label="Add plate" on_submit={on_submit}/>
        </Modal>
    }
}
