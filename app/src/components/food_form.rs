use crate::components::TextInput;
use models::FoodInput;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    pub submit_label: String,
    #[prop_or_default]
    pub initial: FoodInput,
    pub on_submit: Callback<FoodInput>,
}

#[function_component(FoodForm)]
pub fn food_form(props: &Props) -> Html {
    let input = {
        let initial = props.initial.clone();
        use_state(move || initial)
    };

    let field = |update: fn(&mut FoodInput, String)| {
        let input = input.clone();

        Callback::from(move |value: String| {
            let mut changed = (*input).clone();
            update(&mut changed, value);
            input.set(changed);
        })
    };

    let on_image = field(|input, value| input.image = value);
    let on_name = field(|input, value| input.name = value);
    let on_price = field(|input, value| input.price = value);
    let on_description = field(|input, value| input.description = value);

    let on_save = {
        let input = input.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit((*input).clone()))
    };

    html! {
        <div class="food-form">
            <h1>{ props.title.clone() }</h1>
            <TextInput placeholder="Paste the image URL here" value={input.image.clone()} on_change={on_image}/>
            <TextInput placeholder="Ex: Moda Italiana" value={input.name.clone()} on_change={on_name}/>
            <TextInput placeholder="Ex: 19.90" value={input.price.clone()} on_change={on_price}/>
            <TextInput placeholder="Description" value={input.description.clone()} on_change={on_description}/>
            <button type="button" class="button" onclick={on_save}>{ props.submit_label.clone() }</button>
        </div>
    }
}
