//! Domain types shared by every OpenCourse crate.
//!
//! Holds the primitives the persistence and API layers agree on: id and
//! timestamp aliases, the error taxonomy, user roles, the authorization
//! policy table, and the course-progress computation.

pub mod error;
pub mod policy;
pub mod progress;
pub mod roles;
pub mod types;
