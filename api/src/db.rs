use crate::{AppError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{ConnectOptions, FromRow};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, instrument};

const IN_MEMORY: &str = "sqlite::memory:";

#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

#[derive(FromRow)]
struct Food {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl From<Food> for models::FoodPlate {
    fn from(food: Food) -> Self {
        Self {
            id: food.id.into(),
            name: food.name,
            image: food.image,
            price: food.price,
            description: food.description,
            available: food.available,
        }
    }
}

impl Database {
    /// Create new database. Use the environment variable `DATABASE_URL` to point to a valid sqlite
    /// database file, otherwise everything is kept in memory.
    pub async fn new(database: Option<String>) -> Result<Self> {
        let url = database.unwrap_or_else(|| IN_MEMORY.to_string());

        info!("Connecting to {url}");

        let options = SqliteConnectOptions::from_str(&url)?
            .create_if_missing(true)
            .disable_statement_logging();

        // Every connection to an in-memory database sees its own database, so hold on to exactly
        // one.
        let pool = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new()
        }
        .connect_with(options)
        .await?;

        sqlx::query(include_str!("sql/create.sql"))
            .execute(&pool)
            .await?;

        Ok(Self { pool })
    }

    /// Get all foods in insertion order.
    #[instrument]
    pub async fn foods(&self) -> Result<Vec<models::FoodPlate>> {
        let foods = sqlx::query_as::<_, Food>("SELECT * FROM foods ORDER BY id")
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|row| row.into())
            .collect();

        Ok(foods)
    }

    /// Get food by id.
    #[instrument]
    pub async fn food(&self, id: models::FoodId) -> Result<models::FoodPlate> {
        sqlx::query_as::<_, Food>("SELECT * FROM foods WHERE id = ?")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await?
            .map(|row| row.into())
            .ok_or(AppError::NotFound(id))
    }

    /// Add a food and return it with its assigned id.
    #[instrument]
    pub async fn add_food(&self, food: models::NewFood) -> Result<models::FoodPlate> {
        let id = sqlx::query(
            "INSERT INTO foods (name, image, price, description, available) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&food.name)
        .bind(&food.image)
        .bind(&food.price)
        .bind(&food.description)
        .bind(food.available)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(models::FoodPlate::from_new(id.into(), food))
    }

    /// Replace all fields of food `id`.
    #[instrument]
    pub async fn replace_food(
        &self,
        id: models::FoodId,
        food: models::NewFood,
    ) -> Result<models::FoodPlate> {
        sqlx::query_as::<_, Food>(
            "UPDATE foods SET name = ?, image = ?, price = ?, description = ?, available = ? WHERE id = ? RETURNING *",
        )
        .bind(&food.name)
        .bind(&food.image)
        .bind(&food.price)
        .bind(&food.description)
        .bind(food.available)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await?
        .map(|row| row.into())
        .ok_or(AppError::NotFound(id))
    }

    /// Apply the fields present in `patch` to food `id`. Absent fields keep their stored value
    /// within the same statement, so concurrent patches of different fields both stick.
    #[instrument]
    pub async fn patch_food(
        &self,
        id: models::FoodId,
        patch: models::FoodPatch,
    ) -> Result<models::FoodPlate> {
        sqlx::query_as::<_, Food>(
            "UPDATE foods SET \
                name = COALESCE(?, name), \
                image = COALESCE(?, image), \
                price = COALESCE(?, price), \
                description = COALESCE(?, description), \
                available = COALESCE(?, available) \
            WHERE id = ? RETURNING *",
        )
        .bind(patch.name)
        .bind(patch.image)
        .bind(patch.price)
        .bind(patch.description)
        .bind(patch.available)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await?
        .map(|row| row.into())
        .ok_or(AppError::NotFound(id))
    }

    /// Delete food `id`.
    #[instrument]
    pub async fn delete_food(&self, id: models::FoodId) -> Result<()> {
        let result = sqlx::query("DELETE FROM foods WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(id));
        }

        Ok(())
    }

    /// Insert `foods` unless the table already has rows. Returns the number of inserted foods.
    #[instrument(skip_all)]
    pub async fn seed(&self, foods: Vec<models::NewFood>) -> Result<usize> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM foods")
            .fetch_one(&self.pool)
            .await?;

        if count > 0 {
            info!("Not seeding, {count} foods stored already");
            return Ok(0);
        }

        let inserted = foods.len();

        for food in foods {
            self.add_food(food).await?;
        }

        info!("Seeded {inserted} foods");
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_food(name: &str) -> models::NewFood {
        models::NewFood {
            name: name.to_string(),
            image: format!("https://example.com/{name}.png"),
            price: "19.90".to_string(),
            description: format!("{name} description"),
            available: true,
        }
    }

    #[tokio::test]
    async fn add_assigns_increasing_ids() -> anyhow::Result<()> {
        let db = Database::new(None).await?;

        let first = db.add_food(new_food("first")).await?;
        let second = db.add_food(new_food("second")).await?;

        assert_eq!(first.id, 1.into());
        assert_eq!(second.id, 2.into());
        assert_eq!(db.foods().await?, vec![first, second]);
        Ok(())
    }

    #[tokio::test]
    async fn replace_and_patch() -> anyhow::Result<()> {
        let db = Database::new(None).await?;
        let food = db.add_food(new_food("plate")).await?;

        let replaced = db
            .replace_food(
                food.id,
                models::NewFood {
                    price: "25.00".to_string(),
                    ..new_food("renamed")
                },
            )
            .await?;
        assert_eq!(replaced.name, "renamed");
        assert_eq!(db.food(food.id).await?, replaced);

        let patched = db
            .patch_food(
                food.id,
                models::FoodPatch {
                    available: Some(false),
                    ..Default::default()
                },
            )
            .await?;
        assert!(!patched.available);
        assert_eq!(patched.price, "25.00");
        assert_eq!(db.food(food.id).await?, patched);
        Ok(())
    }

    #[tokio::test]
    async fn missing_food_is_not_found() -> anyhow::Result<()> {
        let db = Database::new(None).await?;
        let id = models::FoodId::from(42);

        assert!(matches!(db.food(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(db.delete_food(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            db.replace_food(id, new_food("ghost")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            db.patch_food(id, models::FoodPatch::default()).await,
            Err(AppError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_patches_keep_both_fields() -> anyhow::Result<()> {
        let db = Database::new(None).await?;
        let food = db.add_food(new_food("a")).await?;

        let rename = models::FoodPatch {
            name: Some("renamed".to_string()),
            ..Default::default()
        };
        let disable = models::FoodPatch {
            available: Some(false),
            ..Default::default()
        };

        let (renamed, disabled) = tokio::join!(
            db.patch_food(food.id, rename),
            db.patch_food(food.id, disable)
        );
        renamed?;
        disabled?;

        let stored = db.food(food.id).await?;
        assert_eq!(stored.name, "renamed");
        assert!(!stored.available);
        assert_eq!(stored.price, "19.90");
        Ok(())
    }

    #[tokio::test]
    async fn patch_racing_delete_never_resurrects() -> anyhow::Result<()> {
        let db = Database::new(None).await?;
        let food = db.add_food(new_food("a")).await?;

        let disable = models::FoodPatch {
            available: Some(false),
            ..Default::default()
        };

        let (patched, deleted) = tokio::join!(
            db.patch_food(food.id, disable.clone()),
            db.delete_food(food.id)
        );
        deleted?;

        // either order is fine, but the row is gone and a late patch reports it
        assert!(matches!(patched, Ok(_) | Err(AppError::NotFound(_))));
        assert!(matches!(db.food(food.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            db.patch_food(food.id, disable).await,
            Err(AppError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn replace_returns_stored_row() -> anyhow::Result<()> {
        let db = Database::new(None).await?;
        let food = db.add_food(new_food("a")).await?;

        let replaced = db.replace_food(food.id, new_food("b")).await?;

        assert_eq!(replaced, db.food(food.id).await?);
        assert_eq!(replaced.id, food.id);
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_row() -> anyhow::Result<()> {
        let db = Database::new(None).await?;
        let first = db.add_food(new_food("first")).await?;
        let second = db.add_food(new_food("second")).await?;

        db.delete_food(first.id).await?;

        assert_eq!(db.foods().await?, vec![second]);
        Ok(())
    }

    #[tokio::test]
    async fn seed_only_fills_empty_table() -> anyhow::Result<()> {
        let db = Database::new(None).await?;

        assert_eq!(db.seed(vec![new_food("a"), new_food("b")]).await?, 2);
        assert_eq!(db.seed(vec![new_food("c")]).await?, 0);
        assert_eq!(db.foods().await?.len(), 2);
        Ok(())
    }
}
