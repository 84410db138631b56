//! Shared mocks for unit tests.

use async_trait::async_trait;
use domain_genres::{Genre, GenreRepository, GenreResult};
use uuid::Uuid;

mockall::mock! {
    pub GenreRepo {}

    #[async_trait]
    impl GenreRepository for GenreRepo {
        async fn create(&self, genre: Genre) -> GenreResult<Genre>;
        async fn get_by_id(&self, id: Uuid) -> GenreResult<Option<Genre>>;
        async fn list(&self) -> GenreResult<Vec<Genre>>;
        async fn replace(&self, id: Uuid, genre: Genre) -> GenreResult<Genre>;
        async fn delete(&self, id: Uuid) -> GenreResult<bool>;
    }
}
