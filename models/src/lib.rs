use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier of a food plate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FoodId(i64);

impl From<i64> for FoodId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<FoodId> for i64 {
    fn from(id: FoodId) -> Self {
        id.0
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A menu item as stored by the backend.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FoodPlate {
    pub id: FoodId,
    pub name: String,
    pub image: String,
    /// Decimal price kept as text, e.g. `"19.90"`.
    pub price: String,
    pub description: String,
    pub available: bool,
}

/// Fields a user can fill in, i.e. a plate without identifier and availability.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FoodInput {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

/// Payload used to create a plate.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NewFood {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl From<FoodInput> for NewFood {
    /// New plates are always created as available.
    fn from(input: FoodInput) -> Self {
        Self {
            name: input.name,
            image: input.image,
            price: input.price,
            description: input.description,
            available: true,
        }
    }
}

/// Partial update of a plate. Absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FoodPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl FoodPlate {
    /// Build the stored record for a freshly created plate.
    pub fn from_new(id: FoodId, food: NewFood) -> Self {
        Self {
            id,
            name: food.name,
            image: food.image,
            price: food.price,
            description: food.description,
            available: food.available,
        }
    }

    /// Overlay `input` on this plate. Identifier and availability are kept.
    pub fn merged(&self, input: FoodInput) -> Self {
        Self {
            id: self.id,
            name: input.name,
            image: input.image,
            price: input.price,
            description: input.description,
            available: self.available,
        }
    }

    /// Same plate with `available` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            available: !self.available,
            ..self.clone()
        }
    }

    /// Apply the fields present in `patch`.
    pub fn patched(&self, patch: FoodPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            image: patch.image.unwrap_or_else(|| self.image.clone()),
            price: patch.price.unwrap_or_else(|| self.price.clone()),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            available: patch.available.unwrap_or(self.available),
        }
    }

    /// Form fields of this plate, used to prefill the edit form.
    pub fn input(&self) -> FoodInput {
        FoodInput {
            name: self.name.clone(),
            image: self.image.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
        }
    }
}
