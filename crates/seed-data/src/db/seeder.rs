//! Database seeding utilities.
//!
//! Each routine runs in its own transaction and upserts rows by natural key,
//! so a routine is either fully applied or not at all and re-running it only
//! fills in what is missing. A routine adds its tallies to the caller's
//! [`SeedReport`] only once its transaction has committed.

use sqlx::{PgPool, Postgres, Transaction};
use storefront::{auth::hash_password, errors::AppError, models::UserStatus};
use thiserror::Error;
use tracing::{debug, info};

use super::report::{SeedReport, Upserted};
use crate::fixtures::{
    self, CategoryFixture, LineFixture, OrderFixture, ProductFixture, UserFixture,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Application error: {0}")]
    App(#[from] AppError),
    #[error("Fixture not seeded yet: {0}")]
    MissingFixture(String),
}

type Tx<'a> = Transaction<'a, Postgres>;

/// Database seeder for the storefront fixtures.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs every routine in dependency order.
    pub async fn seed_all(&self) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();
        self.seed_admin(&mut report).await?;
        self.seed_catalog(&mut report).await?;
        self.seed_customer(&mut report).await?;
        Ok(report)
    }

    /// Seeds the admin account and its cart.
    pub async fn seed_admin(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        info!("Seeding admin user");
        let mut tx = self.pool.begin().await?;
        let mut routine = SeedReport::default();

        let admin = ensure_user(&mut tx, &fixtures::admin()).await?;
        routine.record("user", admin);
        routine.record("cart", ensure_cart(&mut tx, admin.id).await?);

        tx.commit().await?;
        report.merge(routine);
        Ok(())
    }

    /// Seeds categories and products with their images.
    pub async fn seed_catalog(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        info!("Seeding catalog");
        let mut tx = self.pool.begin().await?;
        let mut routine = SeedReport::default();

        for category in fixtures::categories() {
            routine.record("category", ensure_category(&mut tx, &category).await?);
        }

        for product in fixtures::products() {
            let upserted = ensure_product(&mut tx, &product).await?;
            routine.record("product", upserted);
            routine.record(
                "product_media",
                ensure_product_media(&mut tx, upserted.id, product.image_url).await?,
            );
        }

        tx.commit().await?;
        report.merge(routine);
        Ok(())
    }

    /// Seeds the test customer with a cart line and a sample order.
    ///
    /// Expects [`seed_catalog`](Self::seed_catalog) to have run.
    pub async fn seed_customer(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        info!("Seeding test customer");
        let mut tx = self.pool.begin().await?;
        let mut routine = SeedReport::default();

        let customer = ensure_user(&mut tx, &fixtures::customer()).await?;
        routine.record("user", customer);

        let cart = ensure_cart(&mut tx, customer.id).await?;
        routine.record("cart", cart);

        info!("Seeding test customer cart");
        for line in fixtures::customer_cart() {
            routine.record(
                "cart_product",
                ensure_cart_line(&mut tx, cart.id, customer.id, &line).await?,
            );
        }

        info!("Seeding test customer sample order");
        let order_fixture = fixtures::sample_order();
        let order = ensure_order(&mut tx, customer.id, &order_fixture).await?;
        routine.record("order", order);
        for line in &order_fixture.lines {
            routine.record("order_product", ensure_order_line(&mut tx, order.id, line).await?);
        }

        tx.commit().await?;
        report.merge(routine);
        Ok(())
    }
}

async fn insert_media(tx: &mut Tx<'_>, url: &str) -> Result<i32, SeedError> {
    let id = sqlx::query_scalar("INSERT INTO media (url) VALUES ($1) RETURNING id")
        .bind(url)
        .fetch_one(&mut **tx)
        .await?;
    Ok(id)
}

async fn ensure_user(tx: &mut Tx<'_>, user: &UserFixture) -> Result<Upserted, SeedError> {
    if let Some(id) = user_id(tx, user.email).await? {
        debug!("User {} already present (id {id})", user.email);
        return Ok(Upserted::existing(id));
    }

    info!("Creating {} user {}", user.role.as_str(), user.email);
    let password = hash_password(user.password)?;
    let media_id = insert_media(tx, user.avatar_url).await?;

    let inserted: Option<i32> = sqlx::query_scalar(
        r#"
        INSERT INTO users (email, name, password, role, status, media_id,
                           recovery_password_token, refresh_token, deleted_at)
        VALUES ($1, $2, $3, $4, $5, $6, NULL, NULL, NULL)
        ON CONFLICT (email) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(user.email)
    .bind(user.name)
    .bind(&password)
    .bind(user.role)
    .bind(UserStatus::Active)
    .bind(media_id)
    .fetch_optional(&mut **tx)
    .await?;

    if let Some(id) = inserted {
        return Ok(Upserted::created(id));
    }

    // Another run inserted the user after our lookup; drop the unused avatar.
    sqlx::query("DELETE FROM media WHERE id = $1")
        .bind(media_id)
        .execute(&mut **tx)
        .await?;

    let id = user_id(tx, user.email)
        .await?
        .ok_or_else(|| SeedError::MissingFixture(format!("user {}", user.email)))?;
    Ok(Upserted::existing(id))
}

async fn user_id(tx: &mut Tx<'_>, email: &str) -> Result<Option<i32>, SeedError> {
    let id = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(id)
}

async fn ensure_cart(tx: &mut Tx<'_>, user_id: i32) -> Result<Upserted, SeedError> {
    let inserted: Option<i32> = sqlx::query_scalar(
        r#"
        INSERT INTO carts (user_id, locked)
        VALUES ($1, FALSE)
        ON CONFLICT (user_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(user_id)
    .fetch_optional(&mut **tx)
    .await?;

    if let Some(id) = inserted {
        return Ok(Upserted::created(id));
    }

    let id = sqlx::query_scalar("SELECT id FROM carts WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&mut **tx)
        .await?;
    Ok(Upserted::existing(id))
}

async fn ensure_category(
    tx: &mut Tx<'_>,
    category: &CategoryFixture,
) -> Result<Upserted, SeedError> {
    let existing: Option<i32> = sqlx::query_scalar("SELECT id FROM categories WHERE name = $1")
        .bind(category.name)
        .fetch_optional(&mut **tx)
        .await?;

    if let Some(id) = existing {
        debug!("Category {} already present (id {id})", category.name);
        return Ok(Upserted::existing(id));
    }

    info!("Seeding {} category", category.name);
    let media_id = insert_media(tx, category.image_url).await?;
    let id = sqlx::query_scalar(
        "INSERT INTO categories (name, media_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(category.name)
    .bind(media_id)
    .fetch_one(&mut **tx)
    .await?;

    Ok(Upserted::created(id))
}

async fn category_id(tx: &mut Tx<'_>, name: &str) -> Result<i32, SeedError> {
    sqlx::query_scalar("SELECT id FROM categories WHERE name = $1")
        .bind(name)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| SeedError::MissingFixture(format!("category {name}")))
}

async fn product_id(tx: &mut Tx<'_>, name: &str) -> Result<Option<i32>, SeedError> {
    let id = sqlx::query_scalar("SELECT id FROM products WHERE name = $1 ORDER BY id LIMIT 1")
        .bind(name)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(id)
}

async fn ensure_product(tx: &mut Tx<'_>, product: &ProductFixture) -> Result<Upserted, SeedError> {
    if let Some(id) = product_id(tx, product.name).await? {
        debug!("Product {} already present (id {id})", product.name);
        return Ok(Upserted::existing(id));
    }

    info!("Seeding {} product", product.name);
    let category_id = category_id(tx, product.category).await?;
    let id = sqlx::query_scalar(
        r#"
        INSERT INTO products (name, description, price, stock, category_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(product.name)
    .bind(product.description)
    .bind(product.price)
    .bind(product.stock)
    .bind(category_id)
    .fetch_one(&mut **tx)
    .await?;

    Ok(Upserted::created(id))
}

async fn ensure_product_media(
    tx: &mut Tx<'_>,
    product_id: i32,
    url: &str,
) -> Result<Upserted, SeedError> {
    let existing: Option<i32> = sqlx::query_scalar(
        r#"
        SELECT pm.media_id
        FROM product_media pm
        JOIN media m ON m.id = pm.media_id
        WHERE pm.product_id = $1 AND m.url = $2
        "#,
    )
    .bind(product_id)
    .bind(url)
    .fetch_optional(&mut **tx)
    .await?;

    if let Some(media_id) = existing {
        return Ok(Upserted::existing(media_id));
    }

    let media_id = insert_media(tx, url).await?;
    sqlx::query("INSERT INTO product_media (product_id, media_id) VALUES ($1, $2)")
        .bind(product_id)
        .bind(media_id)
        .execute(&mut **tx)
        .await?;

    Ok(Upserted::created(media_id))
}

async fn required_product_id(tx: &mut Tx<'_>, name: &str) -> Result<i32, SeedError> {
    product_id(tx, name)
        .await?
        .ok_or_else(|| SeedError::MissingFixture(format!("product {name}")))
}

async fn ensure_cart_line(
    tx: &mut Tx<'_>,
    cart_id: i32,
    user_id: i32,
    line: &LineFixture,
) -> Result<Upserted, SeedError> {
    let product_id = required_product_id(tx, line.product).await?;

    let inserted: Option<i32> = sqlx::query_scalar(
        r#"
        INSERT INTO cart_products (cart_id, product_id, user_id, quantity)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (cart_id, product_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(cart_id)
    .bind(product_id)
    .bind(user_id)
    .bind(line.quantity)
    .fetch_optional(&mut **tx)
    .await?;

    if let Some(id) = inserted {
        return Ok(Upserted::created(id));
    }

    let id = sqlx::query_scalar(
        "SELECT id FROM cart_products WHERE cart_id = $1 AND product_id = $2",
    )
    .bind(cart_id)
    .bind(product_id)
    .fetch_one(&mut **tx)
    .await?;
    Ok(Upserted::existing(id))
}

async fn ensure_order(
    tx: &mut Tx<'_>,
    user_id: i32,
    order: &OrderFixture,
) -> Result<Upserted, SeedError> {
    let inserted: Option<i32> = sqlx::query_scalar(
        r#"
        INSERT INTO orders (code, price, user_id, estimated_delivery)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (code) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(order.code)
    .bind(order.price)
    .bind(user_id)
    .bind(order.estimated_delivery)
    .fetch_optional(&mut **tx)
    .await?;

    if let Some(id) = inserted {
        return Ok(Upserted::created(id));
    }

    let id = sqlx::query_scalar("SELECT id FROM orders WHERE code = $1")
        .bind(order.code)
        .fetch_one(&mut **tx)
        .await?;
    Ok(Upserted::existing(id))
}

async fn ensure_order_line(
    tx: &mut Tx<'_>,
    order_id: i32,
    line: &LineFixture,
) -> Result<Upserted, SeedError> {
    let product_id = required_product_id(tx, line.product).await?;

    let inserted: Option<i32> = sqlx::query_scalar(
        r#"
        INSERT INTO order_products (order_id, product_id, quantity)
        VALUES ($1, $2, $3)
        ON CONFLICT (order_id, product_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(order_id)
    .bind(product_id)
    .bind(line.quantity)
    .fetch_optional(&mut **tx)
    .await?;

    if let Some(id) = inserted {
        return Ok(Upserted::created(id));
    }

    let id = sqlx::query_scalar(
        "SELECT id FROM order_products WHERE order_id = $1 AND product_id = $2",
    )
    .bind(order_id)
    .bind(product_id)
    .fetch_one(&mut **tx)
    .await?;
    Ok(Upserted::existing(id))
}
