use domain_genres::Genre;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Embedded genre snapshot.
///
/// Copied from the Genre document when the movie is created or updated;
/// later genre renames do not rewrite movies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenreSummary {
    pub id: Uuid,
    pub name: String,
}

impl From<&Genre> for GenreSummary {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name.clone(),
        }
    }
}

/// Movie entity - stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Movie title
    pub title: String,
    /// Embedded genre snapshot
    pub genre: GenreSummary,
    /// Copies available for rent
    pub number_in_stock: i32,
    /// Rental price per day
    pub daily_rental_rate: f64,
}

/// DTO for creating a new movie
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// ID of an existing genre
    pub genre_id: Uuid,
    #[validate(range(min = 0, max = 255))]
    pub number_in_stock: i32,
    #[validate(range(min = 0.0, max = 255.0))]
    pub daily_rental_rate: f64,
}

/// DTO for updating an existing movie
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateMovie {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    /// ID of an existing genre to re-point the movie at
    pub genre_id: Option<Uuid>,
    #[validate(range(min = 0, max = 255))]
    pub number_in_stock: Option<i32>,
    #[validate(range(min = 0.0, max = 255.0))]
    pub daily_rental_rate: Option<f64>,
}

impl Movie {
    /// Create a new movie from a CreateMovie DTO and its resolved genre
    pub fn new(input: CreateMovie, genre: &Genre) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            genre: GenreSummary::from(genre),
            number_in_stock: input.number_in_stock,
            daily_rental_rate: input.daily_rental_rate,
        }
    }

    /// Apply scalar updates from an UpdateMovie DTO.
    ///
    /// The genre snapshot is replaced separately, after `genre_id` has been
    /// resolved by the service.
    pub fn apply_update(&mut self, update: UpdateMovie) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(number_in_stock) = update.number_in_stock {
            self.number_in_stock = number_in_stock;
        }
        if let Some(daily_rental_rate) = update.daily_rental_rate {
            self.daily_rental_rate = daily_rental_rate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_genres::CreateGenre;

    fn genre() -> Genre {
        Genre::new(CreateGenre {
            name: "Thriller".to_string(),
        })
    }

    #[test]
    fn test_new_snapshots_genre() {
        let genre = genre();
        let movie = Movie::new(
            CreateMovie {
                title: "Heat".to_string(),
                genre_id: genre.id,
                number_in_stock: 3,
                daily_rental_rate: 2.5,
            },
            &genre,
        );

        assert_eq!(movie.genre.id, genre.id);
        assert_eq!(movie.genre.name, "Thriller");
        assert_eq!(movie.number_in_stock, 3);
    }

    #[test]
    fn test_apply_update_keeps_genre_snapshot() {
        let genre = genre();
        let mut movie = Movie::new(
            CreateMovie {
                title: "Heat".to_string(),
                genre_id: genre.id,
                number_in_stock: 3,
                daily_rental_rate: 2.5,
            },
            &genre,
        );

        movie.apply_update(UpdateMovie {
            number_in_stock: Some(7),
            ..Default::default()
        });

        assert_eq!(movie.number_in_stock, 7);
        assert_eq!(movie.genre.name, "Thriller");
        assert_eq!(movie.title, "Heat");
    }
}
