use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{hall_model::Hall, movie_model::Movie, showtime_model::Showtime};

/// A load either returns the complete collection or fails; there are no
/// partial results.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {collection} from '{}'", path.display())]
    Read {
        collection: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {collection} from '{}'", path.display())]
    Decode {
        collection: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Which collection could not be retrieved.
    pub fn collection(&self) -> &'static str {
        match self {
            LoadError::Read { collection, .. } | LoadError::Decode { collection, .. } => collection,
        }
    }
}

/// Immutable session snapshot of the three raw collections. Loaded once by
/// the caller at startup and passed into the resolver; nothing in this
/// crate mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Catalogue {
    pub movies: Vec<Movie>,
    pub halls: Vec<Hall>,
    pub showtimes: Vec<Showtime>,
}

impl Catalogue {
    /// Fetch all three collections concurrently; the first failed load
    /// fails the whole snapshot.
    pub async fn load(data_dir: &Path) -> Result<Self, LoadError> {
        let (movies, halls, showtimes) = futures::try_join!(
            load_movies(data_dir),
            load_halls(data_dir),
            load_schedule(data_dir),
        )?;
        Ok(Catalogue {
            movies,
            halls,
            showtimes,
        })
    }
}

pub async fn load_movies(data_dir: &Path) -> Result<Vec<Movie>, LoadError> {
    load_collection(data_dir, "movies.json", "movies").await
}

pub async fn load_halls(data_dir: &Path) -> Result<Vec<Hall>, LoadError> {
    load_collection(data_dir, "halls.json", "halls").await
}

pub async fn load_schedule(data_dir: &Path) -> Result<Vec<Showtime>, LoadError> {
    load_collection(data_dir, "schedule.json", "schedule").await
}

async fn load_collection<T: DeserializeOwned>(
    data_dir: &Path,
    file: &str,
    collection: &'static str,
) -> Result<Vec<T>, LoadError> {
    let path = data_dir.join(file);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| LoadError::Read {
            collection,
            path: path.clone(),
            source,
        })?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Decode {
        collection,
        path,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("cinema_schedule_api_tests").join(name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_complete_fixtures(dir: &Path) {
        std::fs::write(
            dir.join("movies.json"),
            r#"[{"id":"m1","title":"Solaris","genre":"Sci-Fi","duration":167,"rating":"PG","coverImage":"/img/solaris.jpg","description":"A station above a strange ocean."}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.join("halls.json"),
            r#"[{"id":"h1","name":"Main Hall","capacity":120,"features":["dolby","3d"]}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.join("schedule.json"),
            r#"[{"id":"s1","movieId":"m1","hallId":"h1","date":"2099-01-01","startTime":"18:00","endTime":"20:47"}]"#,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn loads_all_three_collections() {
        let dir = fixture_dir("load_ok");
        write_complete_fixtures(&dir);

        let catalogue = Catalogue::load(&dir).await.unwrap();
        assert_eq!(catalogue.movies.len(), 1);
        assert_eq!(catalogue.halls.len(), 1);
        assert_eq!(catalogue.showtimes.len(), 1);
        assert_eq!(catalogue.movies[0].cover_image, "/img/solaris.jpg");
        assert_eq!(catalogue.showtimes[0].movie_id, "m1");
        assert_eq!(catalogue.showtimes[0].end_time.as_deref(), Some("20:47"));
    }

    #[tokio::test]
    async fn missing_file_names_the_collection() {
        let dir = fixture_dir("load_missing");
        write_complete_fixtures(&dir);
        std::fs::remove_file(dir.join("halls.json")).unwrap();

        let err = load_halls(&dir).await.unwrap_err();
        assert_eq!(err.collection(), "halls");
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[tokio::test]
    async fn malformed_payload_names_the_collection() {
        let dir = fixture_dir("load_malformed");
        write_complete_fixtures(&dir);
        std::fs::write(dir.join("movies.json"), "{not json").unwrap();

        let err = load_movies(&dir).await.unwrap_err();
        assert_eq!(err.collection(), "movies");
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[tokio::test]
    async fn snapshot_load_is_atomic() {
        let dir = fixture_dir("load_atomic");
        write_complete_fixtures(&dir);
        std::fs::write(dir.join("schedule.json"), "[{\"id\":").unwrap();

        let err = Catalogue::load(&dir).await.unwrap_err();
        assert_eq!(err.collection(), "schedule");
    }
}
