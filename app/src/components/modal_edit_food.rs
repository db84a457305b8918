use crate::components::{FoodForm, Modal};
use models::{FoodInput, FoodPlate};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub is_open: bool,
    pub on_toggle: Callback<()>,
    pub editing_food: Option<FoodPlate>,
    pub on_update_food: Callback<FoodInput>,
}

/// Edit form prefilled from the editing target.
#[function_component(ModalEditFood)]
pub fn modal_edit_food(props: &Props) -> Html {
    let on_submit = {
        let on_update_food = props.on_update_food.clone();
        let on_toggle = props.on_toggle.clone();

        Callback::from(move |input: FoodInput| {
            on_update_food.emit(input);
            on_toggle.emit(());
        })
    };

    let initial = props
        .editing_food
        .as_ref()
        .map(FoodPlate::input)
        .unwrap_or_default();

    html! {
        <Modal is_open={props.is_open} on_close={props.on_toggle.clone()}>
            <FoodForm title="Edit plate" submit_label="Save changes" initial={initial} on_submit={on_submit}/>
        </Modal>
    }
}
