//! HTTP clients and shared models for the café admin front end.
//!
//! Two remote REST collections back this application, each on its own base
//! URL: the café service and the employee service. This crate owns the
//! wire-faithful entity types, one thin client per service, the error type
//! surfaced at the client boundary, and the [`CollectionCache`] screens use
//! to force refetches after mutations.
//!
//! The clients never retry, never time out on their own, and never branch on
//! individual status codes beyond success/failure; the remote services are
//! the validation authority.

mod error;
pub use error::ApiError;

pub mod models;
pub use models::{
    Cafe, CafeSummary, Employee, EmployeeSummary, Gender, NewCafe, NewEmployee,
};

mod cafes;
pub use cafes::{CafeClient, CAFE_API_BASE};

mod employees;
pub use employees::{EmployeeClient, EMPLOYEE_API_BASE};

mod cache;
pub use cache::CollectionCache;
