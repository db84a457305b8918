use crate::Result;
use models::{FoodId, FoodPlate, NewFood};

/// Client for the `foods` resource collection.
///
/// Futures are not required to be `Send` so that browser fetch based clients can implement it.
#[async_trait::async_trait(?Send)]
pub trait FoodsApi {
    /// `GET /foods`
    async fn list(&self) -> Result<Vec<FoodPlate>>;

    /// `POST /foods`, returns the stored plate with its assigned id.
    async fn create(&self, food: &NewFood) -> Result<FoodPlate>;

    /// `PUT /foods/{id}`
    async fn update(&self, id: FoodId, food: &FoodPlate) -> Result<FoodPlate>;

    /// `PATCH /foods/{id}`
    async fn patch(&self, id: FoodId, food: &FoodPlate) -> Result<FoodPlate>;

    /// `DELETE /foods/{id}`
    async fn delete(&self, id: FoodId) -> Result<()>;
}
