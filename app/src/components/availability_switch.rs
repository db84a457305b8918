use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvailabilitySwitchProps {
    pub checked: bool,
    pub on_click: Callback<bool>,
}

/// Checkbox that only ever shows `checked`. Clicks are reported but the box is not flipped
/// locally, it follows once the new state arrives through props.
#[function_component(AvailabilitySwitch)]
pub fn availability_switch(props: &AvailabilitySwitchProps) -> Html {
    let checked = props.checked;

    let on_click = {
        let event = props.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            event.emit(checked);
        })
    };

    let label = if checked { "Available" } else { "Unavailable" };

    html! {
        <div class="availability">
            <span>{ label }</span>
            <label class="toggle">
                <input class="toggle-input" type="checkbox" checked={checked} onclick={on_click} />
                <div class="toggle-bg"></div>
                <div class="toggle-switch"></div>
            </label>
        </div>
    }
}
