//! Enrollment entity model and DTOs.

use opencourse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::course::Course;

/// An enrollment row from the `enrollments` table.
///
/// Unique per (user_id, course_id); `price` is snapshotted from the course
/// at enroll time and `progress` is a derived percentage in [0, 100].
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Enrollment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub price: f64,
    pub progress: f64,
    pub enrolled_at: Timestamp,
}

/// An enrollment with its course embedded, as returned by list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentDetail {
    pub id: DbId,
    pub user_id: DbId,
    pub price: f64,
    pub progress: f64,
    pub enrolled_at: Timestamp,
    pub course: Course,
}

/// Flat join row backing [`EnrollmentDetail`].
#[derive(Debug, Clone, FromRow)]
pub struct EnrollmentWithCourse {
    pub id: DbId,
    pub user_id: DbId,
    pub price: f64,
    pub progress: f64,
    pub enrolled_at: Timestamp,
    pub course_id: DbId,
    pub course_category_id: Option<DbId>,
    pub course_teacher_id: DbId,
    pub course_title: String,
    pub course_description: Option<String>,
    pub course_price: f64,
    pub course_created_at: Timestamp,
    pub course_updated_at: Timestamp,
}

impl From<EnrollmentWithCourse> for EnrollmentDetail {
    fn from(row: EnrollmentWithCourse) -> Self {
        EnrollmentDetail {
            id: row.id,
            user_id: row.user_id,
            price: row.price,
            progress: row.progress,
            enrolled_at: row.enrolled_at,
            course: Course {
                id: row.course_id,
                category_id: row.course_category_id,
                teacher_id: row.course_teacher_id,
                title: row.course_title,
                description: row.course_description,
                price: row.course_price,
                created_at: row.course_created_at,
                updated_at: row.course_updated_at,
            },
        }
    }
}

/// Request body for `POST /api/enrollments` (write-only course reference).
#[derive(Debug, Deserialize)]
pub struct CreateEnrollment {
    pub course_id: DbId,
}
