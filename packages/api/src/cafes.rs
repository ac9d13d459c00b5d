//! Client for the café service.
//!
//! One method per REST endpoint, JSON bodies in and out, no retries and no
//! local timeout policy. The list endpoint answers 404 with a message body
//! when the collection is empty; that is mapped to an empty `Vec`, not an
//! error.

use reqwest::StatusCode;

use crate::error::check_status;
use crate::models::{Cafe, CafeList, CafeSummary, CreatedCafe, NewCafe};
use crate::ApiError;

/// Base URL of the café service, embedded at build time.
pub const CAFE_API_BASE: &str = "http://localhost:5000";

/// Thin HTTP client for the café collection.
#[derive(Clone, Debug)]
pub struct CafeClient {
    http: reqwest::Client,
    base: String,
}

impl Default for CafeClient {
    fn default() -> Self {
        Self::new(CAFE_API_BASE)
    }
}

impl CafeClient {
    /// Client against a specific base URL. Tests point this at a fake
    /// backend; production code uses [`CafeClient::default`].
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    /// `GET /cafes`, optionally filtered by exact location.
    pub async fn list(&self, location: Option<&str>) -> Result<Vec<CafeSummary>, ApiError> {
        let mut req = self.http.get(format!("{}/cafes", self.base));
        if let Some(location) = location {
            req = req.query(&[("location", location)]);
        }
        let resp = req.send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            // Empty collection, not a failure.
            return Ok(Vec::new());
        }
        let resp = check_status(resp)?;
        let body: CafeList = resp.json().await.map_err(ApiError::Decode)?;
        Ok(body.cafes)
    }

    /// `GET /cafe/:id`.
    pub async fn get(&self, id: &str) -> Result<Cafe, ApiError> {
        let resp = self
            .http
            .get(format!("{}/cafe/{id}", self.base))
            .send()
            .await?;
        check_status(resp)?.json().await.map_err(ApiError::Decode)
    }

    /// `POST /cafe`.
    pub async fn create(&self, cafe: &NewCafe) -> Result<CreatedCafe, ApiError> {
        let resp = self
            .http
            .post(format!("{}/cafe", self.base))
            .json(cafe)
            .send()
            .await?;
        check_status(resp)?.json().await.map_err(ApiError::Decode)
    }

    /// `PUT /cafe/:id`.
    pub async fn update(&self, id: &str, cafe: &NewCafe) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(format!("{}/cafe/{id}", self.base))
            .json(cafe)
            .send()
            .await?;
        check_status(resp)?;
        Ok(())
    }

    /// `DELETE /cafe/:id`.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(format!("{}/cafe/{id}", self.base))
            .send()
            .await?;
        check_status(resp)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cafe_row(id: &str, name: &str, location: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "description": "",
            "logo": null,
            "location": location,
            "employee_count": 0,
        })
    }

    #[tokio::test]
    async fn test_list_returns_rows_in_server_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cafes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "cafes": [
                    cafe_row("c1", "Espresso Lane", "Downtown"),
                    cafe_row("c2", "Beanery", "Uptown"),
                ]
            })))
            .mount(&server)
            .await;

        let cafes = CafeClient::new(server.uri()).list(None).await.unwrap();
        assert_eq!(cafes.len(), 2);
        assert_eq!(cafes[0].name, "Espresso Lane");
        assert_eq!(cafes[1].location, "Uptown");
    }

    #[tokio::test]
    async fn test_list_sends_location_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cafes"))
            .and(query_param("location", "Downtown"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "cafes": [cafe_row("c1", "Espresso Lane", "Downtown")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let cafes = CafeClient::new(server.uri())
            .list(Some("Downtown"))
            .await
            .unwrap();
        assert_eq!(cafes.len(), 1);
    }

    #[tokio::test]
    async fn test_list_maps_404_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cafes"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "No cafes found" })),
            )
            .mount(&server)
            .await;

        let cafes = CafeClient::new(server.uri()).list(None).await.unwrap();
        assert!(cafes.is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_exact_payload_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/cafe"))
            .and(body_json(json!({
                "name": "Espresso1",
                "description": "",
                "location": "Downtown",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "message": "Cafe created successfully",
                "cafe_id": "c9",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = CafeClient::new(server.uri())
            .create(&NewCafe {
                name: "Espresso1".into(),
                description: String::new(),
                logo: None,
                location: "Downtown".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.cafe_id, "c9");
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cafe/c1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = CafeClient::new(server.uri()).get("c1").await.unwrap_err();
        match err {
            ApiError::Status { status } => assert_eq!(status, 500),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_hits_item_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/cafe/c1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Cafe deleted successfully"
            })))
            .expect(1)
            .mount(&server)
            .await;

        CafeClient::new(server.uri()).delete("c1").await.unwrap();
    }
}
