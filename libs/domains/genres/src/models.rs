use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Genre entity - stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Genre {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Genre name
    pub name: String,
}

/// DTO for creating a new genre
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateGenre {
    #[validate(length(min = 5, max = 50))]
    pub name: String,
}

/// DTO for updating an existing genre
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateGenre {
    #[validate(length(min = 5, max = 50))]
    pub name: Option<String>,
}

impl Genre {
    /// Create a new genre from a CreateGenre DTO
    pub fn new(input: CreateGenre) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
        }
    }

    /// Apply updates from an UpdateGenre DTO
    pub fn apply_update(&mut self, update: UpdateGenre) {
        if let Some(name) = update.name {
            self.name = name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_id() {
        let genre = Genre::new(CreateGenre {
            name: "Thriller".to_string(),
        });
        assert!(!genre.id.is_nil());
        assert_eq!(genre.name, "Thriller");
    }

    #[test]
    fn test_apply_update_replaces_name() {
        let mut genre = Genre::new(CreateGenre {
            name: "Thriller".to_string(),
        });
        genre.apply_update(UpdateGenre {
            name: Some("Horror".to_string()),
        });
        assert_eq!(genre.name, "Horror");
    }

    #[test]
    fn test_apply_update_empty_is_noop() {
        let mut genre = Genre::new(CreateGenre {
            name: "Thriller".to_string(),
        });
        genre.apply_update(UpdateGenre::default());
        assert_eq!(genre.name, "Thriller");
    }

    #[test]
    fn test_serializes_id_as_underscore_id() {
        let genre = Genre::new(CreateGenre {
            name: "Thriller".to_string(),
        });
        let json = serde_json::to_value(&genre).unwrap();
        assert!(json.get("_id").is_some());
    }
}
