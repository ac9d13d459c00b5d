//! Client for the employee service.
//!
//! Separate base URL from the café service. The list filter is the café
//! *name*, which is what the remote `GET /employees?cafe=` expects; the
//! detail and mutation endpoints speak in terms of `cafe_id`.

use reqwest::StatusCode;

use crate::error::check_status;
use crate::models::{CreatedEmployee, Employee, EmployeeList, EmployeeSummary, NewEmployee};
use crate::ApiError;

/// Base URL of the employee service, embedded at build time.
pub const EMPLOYEE_API_BASE: &str = "http://localhost:5001";

/// Thin HTTP client for the employee collection.
#[derive(Clone, Debug)]
pub struct EmployeeClient {
    http: reqwest::Client,
    base: String,
}

impl Default for EmployeeClient {
    fn default() -> Self {
        Self::new(EMPLOYEE_API_BASE)
    }
}

impl EmployeeClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    /// `GET /employees`, optionally filtered by café name.
    pub async fn list(&self, cafe: Option<&str>) -> Result<Vec<EmployeeSummary>, ApiError> {
        let mut req = self.http.get(format!("{}/employees", self.base));
        if let Some(cafe) = cafe {
            req = req.query(&[("cafe", cafe)]);
        }
        let resp = req.send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            // Empty collection, not a failure.
            return Ok(Vec::new());
        }
        let resp = check_status(resp)?;
        let body: EmployeeList = resp.json().await.map_err(ApiError::Decode)?;
        Ok(body.employees)
    }

    /// `GET /employee/:id`.
    pub async fn get(&self, id: &str) -> Result<Employee, ApiError> {
        let resp = self
            .http
            .get(format!("{}/employee/{id}", self.base))
            .send()
            .await?;
        check_status(resp)?.json().await.map_err(ApiError::Decode)
    }

    /// `POST /employee`.
    pub async fn create(&self, employee: &NewEmployee) -> Result<CreatedEmployee, ApiError> {
        let resp = self
            .http
            .post(format!("{}/employee", self.base))
            .json(employee)
            .send()
            .await?;
        check_status(resp)?.json().await.map_err(ApiError::Decode)
    }

    /// `PUT /employee/:id`.
    pub async fn update(&self, id: &str, employee: &NewEmployee) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(format!("{}/employee/{id}", self.base))
            .json(employee)
            .send()
            .await?;
        check_status(resp)?;
        Ok(())
    }

    /// `DELETE /employee/:id`.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(format!("{}/employee/{id}", self.base))
            .send()
            .await?;
        check_status(resp)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use crate::CollectionCache;
    use chrono::NaiveDate;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn employee_row(id: &str, name: &str, days: i64) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "email_address": "foo@bar.com",
            "phone_number": "81234567",
            "gender": "Other",
            "start_date": "2024-01-01",
            "days_worked": days,
            "cafe": "Espresso Lane",
        })
    }

    #[tokio::test]
    async fn test_list_filters_by_cafe_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/employees"))
            .and(query_param("cafe", "Espresso Lane"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "employees": [employee_row("UIAAAAAAA", "Alice", 200)]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let rows = EmployeeClient::new(server.uri())
            .list(Some("Espresso Lane"))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cafe, "Espresso Lane");
    }

    #[tokio::test]
    async fn test_list_maps_404_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/employees"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({ "message": "No employees found" })),
            )
            .mount(&server)
            .await;

        let rows = EmployeeClient::new(server.uri()).list(None).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_wire_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/employee"))
            .and(body_json(json!({
                "name": "Alice",
                "email_address": "foo@bar.com",
                "phone_number": "81234567",
                "gender": "Female",
                "start_date": "2024-01-01",
                "cafe_id": "c1",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "message": "Employee created successfully",
                "employee_id": "UIAAAAAAA",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = EmployeeClient::new(server.uri())
            .create(&NewEmployee {
                name: "Alice".into(),
                email_address: "foo@bar.com".into(),
                phone_number: "81234567".into(),
                gender: Gender::Female,
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                cafe_id: "c1".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.employee_id, "UIAAAAAAA");
    }

    /// Deleting invalidates the screen's cache, and the next fetch observes
    /// the updated collection from the backend.
    #[tokio::test]
    async fn test_delete_then_invalidate_reflects_removal() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/employees"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "employees": [
                    employee_row("UIAAAAAAA", "Alice", 200),
                    employee_row("UIBBBBBBB", "Bob", 100),
                ]
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        let client = EmployeeClient::new(server.uri());
        let mut cache = CollectionCache::new();
        let before = cache.get_or_fetch(|| client.list(None)).await.unwrap();
        assert_eq!(before.len(), 2);

        Mock::given(method("DELETE"))
            .and(path("/employee/UIBBBBBBB"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Employee deleted successfully"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/employees"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "employees": [employee_row("UIAAAAAAA", "Alice", 200)]
            })))
            .mount(&server)
            .await;

        client.delete("UIBBBBBBB").await.unwrap();
        cache.invalidate();

        let after = cache.get_or_fetch(|| client.list(None)).await.unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id, "UIAAAAAAA");
    }
}
