//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod categories;
pub mod courses;
pub mod enrollments;
pub mod health;
pub mod lessons;
pub mod materials;
pub mod questions;
pub mod users;
