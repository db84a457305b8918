//! Dashboard handlers. Each one issues a single request and, on success, returns the [`Action`]
//! to apply to the current state. On failure nothing is applied.

use crate::{Action, Error, FoodsApi, Result};
use log::{debug, error};
use models::{FoodId, FoodInput, FoodPlate, NewFood};

/// Fetch the whole collection.
pub async fn load(api: &impl FoodsApi) -> Result<Action> {
    let foods = api.list().await?;
    debug!("Loaded {} foods", foods.len());
    Ok(Action::Loaded(foods))
}

/// Create a plate from the form fields. New plates start out available.
pub async fn add(api: &impl FoodsApi, input: FoodInput) -> Result<Action> {
    let food = NewFood::from(input);
    let created = api.create(&food).await?;
    debug!("Created food {}", created.id);
    Ok(Action::Added(created))
}

/// Replace the editing target with `input` merged over it.
pub async fn update(
    api: &impl FoodsApi,
    editing: Option<&FoodPlate>,
    input: FoodInput,
) -> Result<Action> {
    let editing = editing.ok_or(Error::NoEditingTarget)?;
    let food = editing.merged(input);
    let updated = api.update(editing.id, &food).await?;
    debug!("Updated food {}", updated.id);
    Ok(Action::Replaced(updated))
}

/// Flip the availability of `food`.
pub async fn toggle_available(api: &impl FoodsApi, food: &FoodPlate) -> Result<Action> {
    let toggled = api.patch(food.id, &food.toggled()).await?;
    debug!("Food {} available: {}", toggled.id, toggled.available);
    Ok(Action::Replaced(toggled))
}

/// Delete the plate with `id`.
pub async fn delete(api: &impl FoodsApi, id: FoodId) -> Result<Action> {
    api.delete(id).await?;
    debug!("Deleted food {id}");
    Ok(Action::Removed(id))
}

/// Turn a handler outcome into the action to apply. Failures are logged and apply nothing.
pub fn settle(result: Result<Action>, what: &str) -> Option<Action> {
    match result {
        Ok(action) => Some(action),
        Err(err) => {
            error!("Could not {what}: {err}");
            None
        }
    }
}
