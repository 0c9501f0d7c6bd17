//! Fixture rows written by the seeder.
//!
//! Every fixture is identified by a natural key (email, name, code) so the
//! seeder can tell whether it already exists.

use storefront::models::Role;
use time::{OffsetDateTime, macros::datetime};

pub const ADMIN_EMAIL: &str = "admin@gmail.com";
pub const ADMIN_PASSWORD: &str = "admin";
pub const ADMIN_NAME: &str = "Admin User";

pub const TEST_USER_NAME: &str = "Teste";
pub const TEST_USER_EMAIL: &str = "teste@gmail.com";
pub const TEST_USER_PASSWORD: &str = "@Teste123";

pub const DEFAULT_AVATAR_URL: &str = "https://example.com/image.jpg";

pub const TENIS: &str = "Tênis";
pub const SAPATOS: &str = "Sapatos";

pub const PRODUTO_A: &str = "Produto A";
pub const SAPATO_MASCULINO: &str = "Sapato Masculino - Preto";
pub const SAPATO_FEMININO: &str = "Sapato Feminino Mocassim";

pub const TEST_ORDER_CODE: &str = "#testOrder#123";

#[derive(Debug, Clone, Copy)]
pub struct UserFixture {
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub avatar_url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryFixture {
    pub name: &'static str,
    pub image_url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ProductFixture {
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub stock: i32,
    pub category: &'static str,
    pub image_url: &'static str,
}

/// A product reference with a quantity, used by cart and order lines.
#[derive(Debug, Clone, Copy)]
pub struct LineFixture {
    pub product: &'static str,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct OrderFixture {
    pub code: &'static str,
    pub price: f64,
    pub estimated_delivery: OffsetDateTime,
    pub lines: Vec<LineFixture>,
}

pub fn admin() -> UserFixture {
    UserFixture {
        name: ADMIN_NAME,
        email: ADMIN_EMAIL,
        password: ADMIN_PASSWORD,
        role: Role::Admin,
        avatar_url: DEFAULT_AVATAR_URL,
    }
}

pub fn customer() -> UserFixture {
    UserFixture {
        name: TEST_USER_NAME,
        email: TEST_USER_EMAIL,
        password: TEST_USER_PASSWORD,
        role: Role::Customer,
        avatar_url: DEFAULT_AVATAR_URL,
    }
}

pub fn categories() -> Vec<CategoryFixture> {
    vec![
        CategoryFixture {
            name: TENIS,
            image_url: "https://cdn-icons-png.flaticon.com/512/500/500225.png",
        },
        CategoryFixture {
            name: SAPATOS,
            image_url: "https://i.imgur.com/Qo3e2D6.png",
        },
    ]
}

pub fn products() -> Vec<ProductFixture> {
    vec![
        ProductFixture {
            name: PRODUTO_A,
            description: "Produto A description",
            price: 50.5,
            stock: 50,
            category: TENIS,
            image_url: "https://i.pinimg.com/564x/fb/a9/d6/fba9d6e3f87a56403d204c6e99c605b0.jpg",
        },
        ProductFixture {
            name: SAPATO_MASCULINO,
            description: "Sapato masculino social, linha conforto - 1709 Preto",
            price: 334.0,
            stock: 50,
            category: SAPATOS,
            image_url: "https://cdn.shoppub.io/cdn-cgi/image/w=1000,h=1000,q=80,f=auto/difranca/media/uploads/produtos/foto/hxuuhwaz/sapato-masculino-linha-conforto-de-pelica-asa-calcados-1709-preto-par-de-frente-e-de-lado.jpg",
        },
        ProductFixture {
            name: SAPATO_FEMININO,
            description: "Sapato feminino Mocassim tratorado",
            price: 187.0,
            stock: 50,
            category: SAPATOS,
            image_url: "https://cdn.shoppub.io/cdn-cgi/image/w=1000,h=1000,q=80,f=auto/sandromoscoloni/media/uploads/produtos/foto/iuimcdcg/file.png",
        },
    ]
}

/// Items placed in the customer's cart.
pub fn customer_cart() -> Vec<LineFixture> {
    vec![LineFixture {
        product: PRODUTO_A,
        quantity: 1,
    }]
}

pub fn sample_order() -> OrderFixture {
    OrderFixture {
        code: TEST_ORDER_CODE,
        price: 50.5,
        estimated_delivery: datetime!(2024-08-01 0:00 UTC),
        lines: vec![LineFixture {
            product: PRODUTO_A,
            quantity: 1,
        }],
    }
}
