use crate::api::HttpApi;
use crate::components::{Food, Header, ModalAddFood, ModalEditFood};
use ::dashboard::{ops, Action};
use models::{FoodId, FoodInput, FoodPlate};
use std::ops::Deref;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Dashboard state wrapped for `use_reducer`, so every action applies to the latest state.
#[derive(Default, PartialEq)]
struct State(::dashboard::Dashboard);

impl Reducible for State {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.apply(action)))
    }
}

impl Deref for State {
    type Target = ::dashboard::Dashboard;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn dispatch(state: &UseReducerHandle<State>, result: ::dashboard::Result<Action>, what: &str) {
    if let Some(action) = ops::settle(result, what) {
        state.dispatch(action);
    }
}

#[function_component(Dashboard)]
pub fn dashboard_view() -> Html {
    let state = use_reducer(State::default);
    let api = HttpApi::default();

    {
        let state = state.clone();
        let api = api.clone();

        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    dispatch(&state, ops::load(&api).await, "load foods");
                });
                || ()
            },
            (),
        );
    }

    let on_add_food = {
        let state = state.clone();
        let api = api.clone();

        Callback::from(move |input: FoodInput| {
            let state = state.clone();
            let api = api.clone();

            spawn_local(async move {
                dispatch(&state, ops::add(&api, input).await, "add food");
            });
        })
    };

    let on_update_food = {
        let state = state.clone();
        let api = api.clone();

        Callback::from(move |input: FoodInput| {
            let state = state.clone();
            let api = api.clone();
            let editing = state.editing_food().cloned();

            spawn_local(async move {
                let result = ops::update(&api, editing.as_ref(), input).await;
                dispatch(&state, result, "update food");
            });
        })
    };

    let on_toggle_available = {
        let state = state.clone();
        let api = api.clone();

        Callback::from(move |food: FoodPlate| {
            let state = state.clone();
            let api = api.clone();

            spawn_local(async move {
                let result = ops::toggle_available(&api, &food).await;
                dispatch(&state, result, "toggle availability");
            });
        })
    };

    let on_delete = {
        let state = state.clone();
        let api = api.clone();

        Callback::from(move |id: FoodId| {
            let state = state.clone();
            let api = api.clone();

            spawn_local(async move {
                dispatch(&state, ops::delete(&api, id).await, "delete food");
            });
        })
    };

    let on_toggle_modal = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::ToggleModal))
    };

    let on_toggle_edit_modal = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::ToggleEditModal))
    };

    let on_edit = {
        let state = state.clone();
        Callback::from(move |food: FoodPlate| state.dispatch(Action::Edit(food)))
    };

    let foods = state
        .foods()
        .iter()
        .map(|food| {
            html! {
                <Food
                    key={food.id.to_string()}
                    food={food.clone()}
                    on_delete={on_delete.clone()}
                    on_edit={on_edit.clone()}
                    on_toggle_available={on_toggle_available.clone()}
                />
            }
        })
        .collect::<Html>();

    html! {
        <>
        <Header on_open_modal={on_toggle_modal.clone()}/>
        <ModalAddFood
            is_open={state.modal_open()}
            on_toggle={on_toggle_modal}
            on_add_food={on_add_food}
        />
        <ModalEditFood
            is_open={state.edit_modal_open()}
            on_toggle={on_toggle_edit_modal}
            editing_food={state.editing_food().cloned()}
            on_update_food={on_update_food}
        />
        <main class="foods" data-testid="foods-list">
            { foods }
        </main>
        </>
    }
}
