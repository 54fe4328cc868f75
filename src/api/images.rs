//! Image lookup collaborator and its Unsplash adapter

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::LookupError;
use crate::state::SpotImage;

const UNSPLASH_SEARCH: &str = "https://api.unsplash.com/search/photos";

/// Finds photos for a free-text query.
#[async_trait]
pub trait ImageLookup: Send + Sync {
    /// `limit` of `None` leaves the page size to the service.
    async fn lookup(&self, query: &str, limit: Option<usize>)
        -> Result<Vec<SpotImage>, LookupError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
    user: Photographer,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

#[derive(Debug, Deserialize)]
struct Photographer {
    name: String,
    links: PhotographerLinks,
}

#[derive(Debug, Deserialize)]
struct PhotographerLinks {
    html: String,
}

impl From<Photo> for SpotImage {
    fn from(photo: Photo) -> Self {
        SpotImage {
            url: photo.urls.regular,
            photographer: photo.user.name,
            photographer_url: photo.user.links.html,
        }
    }
}

#[derive(Clone, Debug)]
pub struct UnsplashClient {
    access_key: Option<String>,
}

impl UnsplashClient {
    pub fn new(access_key: Option<String>) -> Self {
        Self {
            access_key: access_key.filter(|key| !key.trim().is_empty()),
        }
    }

    fn search_url(query: &str, limit: Option<usize>) -> String {
        let mut url = format!(
            "{UNSPLASH_SEARCH}?query={}&orientation=landscape",
            urlencoding::encode(query)
        );
        if let Some(limit) = limit {
            url.push_str(&format!("&per_page={limit}"));
        }
        url
    }
}

#[async_trait]
impl ImageLookup for UnsplashClient {
    async fn lookup(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<SpotImage>, LookupError> {
        let key = self
            .access_key
            .as_deref()
            .ok_or(LookupError::MissingAccessKey)?;

        let response = super::http_client()
            .get(Self::search_url(query, limit))
            .header("Authorization", format!("Client-ID {key}"))
            .header("Accept-Version", "v1")
            .send()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| LookupError::Request(e.to_string()))?;

        let data: SearchResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        let mut images: Vec<SpotImage> = data.results.into_iter().map(SpotImage::from).collect();
        if let Some(limit) = limit {
            images.truncate(limit);
        }
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query_and_limit() {
        let url = UnsplashClient::search_url("kitesurfing Cadiz, Spain", Some(1));
        assert!(url.contains("query=kitesurfing%20Cadiz%2C%20Spain"));
        assert!(url.ends_with("&per_page=1"));

        let url = UnsplashClient::search_url("Tarifa", None);
        assert!(!url.contains("per_page"));
    }

    #[test]
    fn test_photo_maps_to_spot_image() {
        let json = r#"{"results":[{"urls":{"regular":"https://img.example/r.jpg"},
            "user":{"name":"Mia","links":{"html":"https://unsplash.com/@mia"}}}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let images: Vec<SpotImage> = response.results.into_iter().map(Into::into).collect();
        assert_eq!(images[0].photographer, "Mia");
        assert_eq!(images[0].photographer_url, "https://unsplash.com/@mia");
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_request() {
        let client = UnsplashClient::new(Some("  ".into()));
        let err = client.lookup("Tarifa", None).await.unwrap_err();
        assert!(matches!(err, LookupError::MissingAccessKey));
    }
}
