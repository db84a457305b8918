mod availability_switch;
mod food;
mod food_form;
mod header;
mod modal;
mod modal_add_food;
mod modal_edit_food;
mod text_input;

pub use availability_switch::AvailabilitySwitch;
pub use food::Food;
pub use food_form::FoodForm;
pub use header::Header;
pub use modal::Modal;
pub use modal_add_food::ModalAddFood;
pub use modal_edit_food::ModalEditFood;
pub use text_input::TextInput;
