use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Account role stored in the `user_role` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Media {
    pub id: i32,
    pub url: String,
}

/// A product category together with its image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub media_id: Option<i32>,
    pub media: Option<Media>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}

/// Flat `categories LEFT JOIN media` row.
#[derive(Debug, FromRow)]
pub struct CategoryRow {
    pub id: i32,
    pub name: String,
    pub media_id: Option<i32>,
    pub media_url: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        let media = match (row.media_id, row.media_url) {
            (Some(id), Some(url)) => Some(Media { id, url }),
            _ => None,
        };

        Self {
            id: row.id,
            name: row.name,
            media_id: row.media_id,
            media,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMedia {
    pub url: String,
}

/// Category insert with its nested media insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub media: NewMedia,
}

/// Input of [`CategoriesService::create_category`](crate::categories::CategoriesService::create_category).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategory {
    pub name: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(media_id: Option<i32>, media_url: Option<&str>) -> CategoryRow {
        let now = OffsetDateTime::now_utc();
        CategoryRow {
            id: 7,
            name: "Sapatos".to_string(),
            media_id,
            media_url: media_url.map(str::to_string),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn category_row_nests_joined_media() {
        let category = Category::from(row(Some(3), Some("https://i.imgur.com/Qo3e2D6.png")));

        assert_eq!(category.media_id, Some(3));
        assert_eq!(
            category.media,
            Some(Media {
                id: 3,
                url: "https://i.imgur.com/Qo3e2D6.png".to_string(),
            })
        );
    }

    #[test]
    fn category_row_without_media() {
        let category = Category::from(row(None, None));
        assert!(category.media.is_none());
    }

    #[test]
    fn category_serializes_camel_case() {
        let category = Category::from(row(Some(1), Some("https://example.com/a.png")));
        let json = serde_json::to_value(&category).unwrap();

        assert_eq!(json["mediaId"], 1);
        assert_eq!(json["media"]["url"], "https://example.com/a.png");
        assert!(json.get("deletedAt").is_some());
    }

    #[test]
    fn role_matches_database_labels() {
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(Role::Customer.as_str(), "customer");
    }
}
