//! Entity types mirroring the remote services' JSON shapes.
//!
//! Field names are fixed by the wire format and must not be renamed. The two
//! services expose slightly different shapes for list rows and detail
//! objects, so both are modelled: list rows carry display extras
//! (`employee_count`, the café *name* on an employee), detail objects carry
//! the canonical `cafe_id`.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A café as returned by `GET /cafe/:id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cafe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: Option<String>,
    pub location: String,
}

/// A café row as returned by `GET /cafes`.
///
/// The list endpoint adds `employee_count` and orders rows by it,
/// descending. The client keeps that ordering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CafeSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: Option<String>,
    pub location: String,
    #[serde(default)]
    pub employee_count: u32,
}

/// Request body for creating or updating a café.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCafe {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub location: String,
}

/// Employee gender, serialized as the exact strings the service stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Gender> {
        match value {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An employee row as returned by `GET /employees`.
///
/// `cafe` is the café *name* and is display-only; the canonical association
/// lives on the detail shape as `cafe_id`. Rows arrive ordered by
/// `days_worked`, descending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub id: String,
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: Gender,
    pub start_date: NaiveDate,
    pub days_worked: i64,
    #[serde(default)]
    pub cafe: String,
}

/// An employee as returned by `GET /employee/:id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: Gender,
    pub start_date: NaiveDate,
    pub cafe_id: Option<String>,
    pub days_worked: i64,
}

/// Request body for creating or updating an employee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email_address: String,
    pub phone_number: String,
    pub gender: Gender,
    pub start_date: NaiveDate,
    pub cafe_id: String,
}

/// Envelope for `GET /cafes`.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct CafeList {
    pub cafes: Vec<CafeSummary>,
}

/// Envelope for `GET /employees`.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct EmployeeList {
    pub employees: Vec<EmployeeSummary>,
}

/// Ack for `POST /cafe`.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedCafe {
    pub message: String,
    pub cafe_id: String,
}

/// Ack for `POST /employee`.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedEmployee {
    pub message: String,
    pub employee_id: String,
}

/// Days elapsed since `start`, floored at zero for future start dates.
pub fn days_between(start: NaiveDate, today: NaiveDate) -> i64 {
    (today - start).num_days().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_round_trips_wire_strings() {
        for gender in Gender::ALL {
            assert_eq!(Gender::parse(gender.as_str()), Some(gender));
        }
        assert_eq!(Gender::parse("male"), None);
    }

    #[test]
    fn test_new_cafe_omits_absent_logo() {
        let body = serde_json::to_value(NewCafe {
            name: "Espresso1".into(),
            description: String::new(),
            logo: None,
            location: "Downtown".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Espresso1",
                "description": "",
                "location": "Downtown",
            })
        );
    }

    #[test]
    fn test_employee_summary_decodes_wire_shape() {
        let row: EmployeeSummary = serde_json::from_value(serde_json::json!({
            "id": "UI1A2B3C4",
            "name": "Alice",
            "email_address": "alice@example.com",
            "phone_number": "81234567",
            "gender": "Female",
            "start_date": "2024-01-15",
            "days_worked": 120,
            "cafe": "Espresso Lane",
        }))
        .unwrap();
        assert_eq!(row.gender, Gender::Female);
        assert_eq!(row.start_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(row.cafe, "Espresso Lane");
    }

    #[test]
    fn test_days_between_floors_future_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(days_between(start, today), 31);
        assert_eq!(days_between(today, start), 0);
    }
}
