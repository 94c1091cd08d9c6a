//! Tests for MovieService against an in-memory repository.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::movies::{
        Movie, MovieRepositoryTrait, MovieService, MovieServiceTrait, MovieUpdate, NewMovie,
    };
    use crate::search::{SearchHits, SearchQuery};
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    // ==================== Mock Repository ====================

    #[derive(Default)]
    struct MockMovieRepository {
        movies: Arc<Mutex<BTreeMap<String, Movie>>>,
        saves: Arc<Mutex<usize>>,
    }

    impl MockMovieRepository {
        fn with_movies(movies: Vec<Movie>) -> Self {
            let repo = Self::default();
            {
                let mut map = repo.movies.lock().unwrap();
                for movie in movies {
                    map.insert(movie.id.clone(), movie);
                }
            }
            repo
        }
    }

    #[async_trait]
    impl MovieRepositoryTrait for MockMovieRepository {
        async fn search(&self, query: &SearchQuery) -> Result<SearchHits<Movie>> {
            let map = self.movies.lock().unwrap();
            let mut matches: Vec<Movie> = map
                .values()
                .filter(|m| query.is_match_all() || m.title.contains(&query.text))
                .cloned()
                .collect();
            matches.sort_by(|a, b| {
                b.rating
                    .total_cmp(&a.rating)
                    .then_with(|| a.title.cmp(&b.title))
            });
            let total = matches.len() as i64;
            let items = matches
                .into_iter()
                .skip(query.offset() as usize)
                .take(query.page_size as usize)
                .collect();
            Ok(SearchHits { total, items })
        }

        async fn get_by_id(&self, movie_id: &str) -> Result<Option<Movie>> {
            Ok(self.movies.lock().unwrap().get(movie_id).cloned())
        }

        async fn save(&self, movie: &Movie) -> Result<Movie> {
            *self.saves.lock().unwrap() += 1;
            self.movies
                .lock()
                .unwrap()
                .insert(movie.id.clone(), movie.clone());
            Ok(movie.clone())
        }

        async fn delete(&self, movie_id: &str) -> Result<bool> {
            Ok(self.movies.lock().unwrap().remove(movie_id).is_some())
        }
    }

    fn movie(id: &str, title: &str, rating: f64) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            genre: "Drama".to_string(),
            rating,
            release_year: 2000,
        }
    }

    fn seeded() -> Vec<Movie> {
        vec![
            movie("1", "Inception", 8.8),
            movie("2", "The Dark Knight", 9.0),
            movie("3", "Interstellar", 8.6),
            movie("4", "La La Land", 8.0),
            movie("5", "The Godfather", 9.2),
        ]
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_search_all_on_one_page() {
        let service = MovieService::new(Arc::new(MockMovieRepository::with_movies(seeded())));

        let response = service
            .search_movies(SearchQuery::new("", 1, 5))
            .await
            .unwrap();

        assert_eq!(response.movies.len(), 5);
        assert_eq!(response.pagination.total_hits, 5);
        assert_eq!(response.pagination.total_pages, 1);
        assert_eq!(response.movies[0].title, "The Godfather");
    }

    #[tokio::test]
    async fn test_search_without_hits_has_zero_pages() {
        let service = MovieService::new(Arc::new(MockMovieRepository::default()));

        let response = service
            .search_movies(SearchQuery::new("nothing", 1, 5))
            .await
            .unwrap();

        assert!(response.movies.is_empty());
        assert_eq!(response.pagination.total_pages, 0);
    }

    #[tokio::test]
    async fn test_create_assigns_uuid() {
        let repo = MockMovieRepository::default();
        let store = repo.movies.clone();
        let service = MovieService::new(Arc::new(repo));

        let created = service
            .create_movie(NewMovie {
                title: " Heat ".to_string(),
                description: String::new(),
                genre: "Crime".to_string(),
                rating: 8.3,
                release_year: 1995,
            })
            .await
            .unwrap();

        assert_eq!(created.title, "Heat");
        assert_eq!(created.id.len(), 36);
        assert!(store.lock().unwrap().contains_key(&created.id));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let service = MovieService::new(Arc::new(MockMovieRepository::default()));
        let err = service.get_movie("missing").await.unwrap_err();
        assert!(matches!(err, Error::NotFound { entity: "Movie", .. }));
    }

    #[tokio::test]
    async fn test_replace_missing_does_not_create() {
        let repo = MockMovieRepository::default();
        let store = repo.movies.clone();
        let service = MovieService::new(Arc::new(repo));

        let err = service
            .replace_movie(
                "ghost",
                NewMovie {
                    title: "Ghost".to_string(),
                    description: String::new(),
                    genre: String::new(),
                    rating: 0.0,
                    release_year: 0,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotFound { .. }));
        assert!(store.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_untouched_fields() {
        let service = MovieService::new(Arc::new(MockMovieRepository::with_movies(seeded())));
        let update: MovieUpdate = serde_json::from_str(r#"{"genre": "Thriller"}"#).unwrap();

        let updated = service.update_movie("1", update).await.unwrap();

        assert_eq!(updated.genre, "Thriller");
        assert_eq!(updated.title, "Inception");
        assert_eq!(updated.rating, 8.8);
    }

    #[tokio::test]
    async fn test_invalid_update_does_not_save() {
        let repo = MockMovieRepository::with_movies(seeded());
        let saves = repo.saves.clone();
        let service = MovieService::new(Arc::new(repo));
        let update: MovieUpdate = serde_json::from_str(r#"{"title": null}"#).unwrap();

        let err = service.update_movie("1", update).await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(*saves.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found_without_side_effect() {
        let repo = MockMovieRepository::with_movies(seeded());
        let store = repo.movies.clone();
        let service = MovieService::new(Arc::new(repo));

        let err = service.delete_movie("missing").await.unwrap_err();

        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(store.lock().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let repo = MockMovieRepository::with_movies(seeded());
        let store = repo.movies.clone();
        let service = MovieService::new(Arc::new(repo));

        service.delete_movie("3").await.unwrap();

        assert!(!store.lock().unwrap().contains_key("3"));
    }
}
