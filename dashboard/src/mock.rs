//! In-memory `foods` collection recording every request it receives.

use crate::{Error, FoodsApi, Result};
use models::{FoodId, FoodPlate, NewFood};
use std::cell::RefCell;

#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    List,
    Create(NewFood),
    Update(FoodId, FoodPlate),
    Patch(FoodId, FoodPlate),
    Delete(FoodId),
}

#[derive(Default)]
pub struct Mock {
    foods: RefCell<Vec<FoodPlate>>,
    requests: RefCell<Vec<Request>>,
    failure: RefCell<Option<Error>>,
}

pub fn plate(id: i64) -> FoodPlate {
    FoodPlate {
        id: id.into(),
        name: format!("Plate {id}"),
        image: format!("https://example.com/{id}.png"),
        price: format!("{id}.90"),
        description: format!("Description of plate {id}"),
        available: true,
    }
}

impl Mock {
    pub fn with(foods: Vec<FoodPlate>) -> Self {
        Self {
            foods: RefCell::new(foods),
            ..Default::default()
        }
    }

    pub fn failing(error: Error) -> Self {
        let mock = Self::default();
        mock.fail_with(error);
        mock
    }

    /// Make every following request fail with `error`.
    pub fn fail_with(&self, error: Error) {
        *self.failure.borrow_mut() = Some(error);
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    fn record(&self, request: Request) -> Result<()> {
        self.requests.borrow_mut().push(request);

        match self.failure.borrow().as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn replace(&self, id: FoodId, food: &FoodPlate) -> Result<FoodPlate> {
        let mut foods = self.foods.borrow_mut();

        let stored = foods
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::Status {
                status: 404,
                reason: "Not Found".to_string(),
            })?;

        *stored = FoodPlate { id, ..food.clone() };
        Ok(stored.clone())
    }
}

#[async_trait::async_trait(?Send)]
impl FoodsApi for Mock {
    async fn list(&self) -> Result<Vec<FoodPlate>> {
        self.record(Request::List)?;
        Ok(self.foods.borrow().clone())
    }

    async fn create(&self, food: &NewFood) -> Result<FoodPlate> {
        self.record(Request::Create(food.clone()))?;

        let mut foods = self.foods.borrow_mut();
        let next = foods.iter().map(|item| i64::from(item.id)).max().unwrap_or(0) + 1;
        let created = FoodPlate::from_new(next.into(), food.clone());
        foods.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: FoodId, food: &FoodPlate) -> Result<FoodPlate> {
        self.record(Request::Update(id, food.clone()))?;
        self.replace(id, food)
    }

    async fn patch(&self, id: FoodId, food: &FoodPlate) -> Result<FoodPlate> {
        self.record(Request::Patch(id, food.clone()))?;
        self.replace(id, food)
    }

    async fn delete(&self, id: FoodId) -> Result<()> {
        self.record(Request::Delete(id))?;
        self.foods.borrow_mut().retain(|item| item.id != id);
        Ok(())
    }
}
