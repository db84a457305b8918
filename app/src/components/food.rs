use crate::components::AvailabilitySwitch;
use models::{FoodId, FoodPlate};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub food: FoodPlate,
    pub on_delete: Callback<FoodId>,
    pub on_edit: Callback<FoodPlate>,
    pub on_toggle_available: Callback<FoodPlate>,
}

#[function_component(Food)]
pub fn food(props: &Props) -> Html {
    let food = &props.food;

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let food = food.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(food.clone()))
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = food.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    let on_toggle = {
        let on_toggle_available = props.on_toggle_available.clone();
        let food = food.clone();
        Callback::from(move |_: bool| on_toggle_available.emit(food.clone()))
    };

    html! {
        <div class={classes!("food", (!food.available).then(|| "unavailable"))}>
            <header>
                <img src={food.image.clone()} alt={food.name.clone()} />
            </header>
            <section class="body">
                <h2>{ food.name.clone() }</h2>
                <p>{ food.description.clone() }</p>
                <p class="price">{ "R$ " }<b>{ food.price.clone() }</b></p>
            </section>
            <section class="footer">
                <div class="icon-container">
                    <button type="button" class="icon" onclick={on_edit}>{ "Edit" }</button>
                    <button type="button" class="icon" onclick={on_delete}>{ "Delete" }</button>
                </div>
                <AvailabilitySwitch checked={food.available} on_click={on_toggle}/>
            </section>
        </div>
    }
}
