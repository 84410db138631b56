//! Shared fixtures and mocks for unit tests.

use async_trait::async_trait;
use domain_customers::{CreateCustomer, Customer, CustomerRepository, CustomerResult};
use domain_genres::{CreateGenre, Genre};
use domain_movies::{CreateMovie, Movie, MovieRepository, MovieResult};
use uuid::Uuid;

pub fn customer() -> Customer {
    Customer::new(CreateCustomer {
        name: "Jamie Doe".to_string(),
        phone: "555-0101".to_string(),
        is_gold: false,
    })
}

pub fn movie(number_in_stock: i32) -> Movie {
    let genre = Genre::new(CreateGenre {
        name: "Thriller".to_string(),
    });
    Movie::new(
        CreateMovie {
            title: "Heat".to_string(),
            genre_id: genre.id,
            number_in_stock,
            daily_rental_rate: 2.5,
        },
        &genre,
    )
}

mockall::mock! {
    pub CustomerRepo {}

    #[async_trait]
    impl CustomerRepository for CustomerRepo {
        async fn create(&self, customer: Customer) -> CustomerResult<Customer>;
        async fn get_by_id(&self, id: Uuid) -> CustomerResult<Option<Customer>>;
        async fn list(&self) -> CustomerResult<Vec<Customer>>;
        async fn replace(&self, id: Uuid, customer: Customer) -> CustomerResult<Customer>;
        async fn delete(&self, id: Uuid) -> CustomerResult<bool>;
    }
}

mockall::mock! {
    pub MovieRepo {}

    #[async_trait]
    impl MovieRepository for MovieRepo {
        async fn create(&self, movie: Movie) -> MovieResult<Movie>;
        async fn get_by_id(&self, id: Uuid) -> MovieResult<Option<Movie>>;
        async fn list(&self) -> MovieResult<Vec<Movie>>;
        async fn replace(&self, id: Uuid, movie: Movie) -> MovieResult<Movie>;
        async fn delete(&self, id: Uuid) -> MovieResult<bool>;
    }
}
