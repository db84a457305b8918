//! `FoodsApi` over the browser fetch API.

use dashboard::{Error, FoodsApi, Result};
use gloo_net::http::{Request, Response};
use models::{FoodId, FoodPlate, NewFood};
use serde::de::DeserializeOwned;

const DEFAULT_API_URL: &str = "http://localhost:3333";

/// HTTP client for the `foods` collection below a base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpApi {
    base: String,
}

impl Default for HttpApi {
    /// Use the base URL set via `FOODS_API_URL` at build time.
    fn default() -> Self {
        Self::new(option_env!("FOODS_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

impl HttpApi {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn foods(&self) -> String {
        format!("{}/foods", self.base)
    }

    fn food(&self, id: FoodId) -> String {
        format!("{}/foods/{id}", self.base)
    }
}

fn into_error(err: gloo_net::Error) -> Error {
    match err {
        gloo_net::Error::SerdeError(err) => Error::Decode(err.to_string()),
        err => Error::Transport(err.to_string()),
    }
}

fn check(response: Response) -> Result<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(Error::Status {
            status: response.status(),
            reason: response.status_text(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    check(response)?.json().await.map_err(into_error)
}

#[async_trait::async_trait(?Send)]
impl FoodsApi for HttpApi {
    async fn list(&self) -> Result<Vec<FoodPlate>> {
        let response = Request::get(&self.foods())
            .send()
            .await
            .map_err(into_error)?;

        decode(response).await
    }

    async fn create(&self, food: &NewFood) -> Result<FoodPlate> {
        let response = Request::post(&self.foods())
            .json(food)
            .map_err(into_error)?
            .send()
            .await
            .map_err(into_error)?;

        decode(response).await
    }

    async fn update(&self, id: FoodId, food: &FoodPlate) -> Result<FoodPlate> {
        let response = Request::put(&self.food(id))
            .json(food)
            .map_err(into_error)?
            .send()
            .await
            .map_err(into_error)?;

        decode(response).await
    }

    async fn patch(&self, id: FoodId, food: &FoodPlate) -> Result<FoodPlate> {
        let response = Request::patch(&self.food(id))
            .json(food)
            .map_err(into_error)?
            .send()
            .await
            .map_err(into_error)?;

        decode(response).await
    }

    async fn delete(&self, id: FoodId) -> Result<()> {
        let response = Request::delete(&self.food(id))
            .send()
            .await
            .map_err(into_error)?;

        check(response).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_urls() {
        let api = HttpApi::new("http://localhost:3333/");
        assert_eq!(api.foods(), "http://localhost:3333/foods");
        assert_eq!(api.food(7.into()), "http://localhost:3333/foods/7");
    }
}
