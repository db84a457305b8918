use models::{FoodId, FoodPlate};

/// Changes that can be applied to a [`Dashboard`].
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Initial list arrived.
    Loaded(Vec<FoodPlate>),
    /// A plate was created.
    Added(FoodPlate),
    /// A plate was updated or its availability toggled.
    Replaced(FoodPlate),
    /// A plate was deleted.
    Removed(FoodId),
    ToggleModal,
    ToggleEditModal,
    /// Open the edit modal for the given plate.
    Edit(FoodPlate),
}

/// Everything the dashboard view displays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    foods: Vec<FoodPlate>,
    editing_food: Option<FoodPlate>,
    modal_open: bool,
    edit_modal_open: bool,
}

impl Dashboard {
    /// Plates in the order they arrived.
    pub fn foods(&self) -> &[FoodPlate] {
        &self.foods
    }

    /// Plate currently loaded into the edit form, if any.
    pub fn editing_food(&self) -> Option<&FoodPlate> {
        self.editing_food.as_ref()
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn edit_modal_open(&self) -> bool {
        self.edit_modal_open
    }

    /// Return the state resulting from `action`. The list is always rebuilt, never touched in
    /// place.
    pub fn apply(&self, action: Action) -> Self {
        match action {
            Action::Loaded(foods) => Self {
                foods,
                ..self.clone()
            },
            Action::Added(food) => Self {
                foods: self.foods.iter().cloned().chain(Some(food)).collect(),
                ..self.clone()
            },
            Action::Replaced(food) => Self {
                foods: self
                    .foods
                    .iter()
                    .map(|item| {
                        if item.id == food.id {
                            food.clone()
                        } else {
                            item.clone()
                        }
                    })
                    .collect(),
                ..self.clone()
            },
            Action::Removed(id) => Self {
                foods: self.foods.iter().filter(|item| item.id != id).cloned().collect(),
                ..self.clone()
            },
            Action::ToggleModal => Self {
                modal_open: !self.modal_open,
                ..self.clone()
            },
            Action::ToggleEditModal => Self {
                edit_modal_open: !self.edit_modal_open,
                ..self.clone()
            },
            Action::Edit(food) => Self {
                editing_food: Some(food),
                edit_modal_open: !self.edit_modal_open,
                ..self.clone()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::plate;

    fn loaded(ids: &[i64]) -> Dashboard {
        Dashboard::default().apply(Action::Loaded(ids.iter().map(|&id| plate(id)).collect()))
    }

    fn ids(dashboard: &Dashboard) -> Vec<i64> {
        dashboard.foods().iter().map(|food| food.id.into()).collect()
    }

    #[test]
    fn starts_empty_and_closed() {
        let dashboard = Dashboard::default();
        assert!(dashboard.foods().is_empty());
        assert!(dashboard.editing_food().is_none());
        assert!(!dashboard.modal_open());
        assert!(!dashboard.edit_modal_open());
    }

    #[test]
    fn loaded_keeps_response_order() {
        assert_eq!(ids(&loaded(&[3, 1, 2])), vec![3, 1, 2]);
    }

    #[test]
    fn added_appends() {
        let dashboard = loaded(&[1, 2]).apply(Action::Added(plate(5)));
        assert_eq!(ids(&dashboard), vec![1, 2, 5]);
        assert_eq!(dashboard.foods()[2], plate(5));
    }

    #[test]
    fn replaced_touches_only_matching_id() {
        let before = loaded(&[1, 2, 3]);
        let mut edited = plate(2);
        edited.name = "Edited".to_string();

        let after = before.apply(Action::Replaced(edited.clone()));

        assert_eq!(ids(&after), vec![1, 2, 3]);
        assert_eq!(after.foods()[1], edited);
        assert_eq!(after.foods()[0], before.foods()[0]);
        assert_eq!(after.foods()[2], before.foods()[2]);
    }

    #[test]
    fn replaced_unknown_id_is_a_no_op() {
        let before = loaded(&[1, 2]);
        assert_eq!(before.apply(Action::Replaced(plate(9))), before);
    }

    #[test]
    fn removed_keeps_others_in_order() {
        let after = loaded(&[4, 1, 7, 2]).apply(Action::Removed(7.into()));
        assert_eq!(ids(&after), vec![4, 1, 2]);
    }

    #[test]
    fn modal_flags_are_independent() {
        let dashboard = Dashboard::default().apply(Action::ToggleModal);
        assert!(dashboard.modal_open());
        assert!(!dashboard.edit_modal_open());

        let dashboard = dashboard.apply(Action::ToggleEditModal);
        assert!(dashboard.modal_open());
        assert!(dashboard.edit_modal_open());

        let dashboard = dashboard.apply(Action::ToggleModal);
        assert!(!dashboard.modal_open());
        assert!(dashboard.edit_modal_open());
    }

    #[test]
    fn edit_captures_target_and_opens_modal() {
        let dashboard = loaded(&[1, 2]).apply(Action::Edit(plate(2)));
        assert_eq!(dashboard.editing_food(), Some(&plate(2)));
        assert!(dashboard.edit_modal_open());

        // closing keeps the last target around
        let dashboard = dashboard.apply(Action::ToggleEditModal);
        assert!(!dashboard.edit_modal_open());
        assert_eq!(dashboard.editing_food(), Some(&plate(2)));
    }

    #[test]
    fn actions_apply_to_latest_state() {
        // A delete completing between an add's request and response must survive the add.
        let start = loaded(&[1, 2]);
        let after_delete = start.apply(Action::Removed(1.into()));
        let after_add = after_delete.apply(Action::Added(plate(3)));
        assert_eq!(ids(&after_add), vec![2, 3]);
    }
}
