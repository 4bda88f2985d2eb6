//! Integration tests for the enrollment and progress workflow.
//!
//! Exercises the repository layer against a real database:
//! - Idempotent get-or-create enrollment
//! - Price snapshot at enroll time
//! - Lesson completion, aggregate recomputation, and re-completion
//! - Missing lesson / missing enrollment short-circuits

use opencourse_core::roles::Role;
use opencourse_db::models::course::CreateCourse;
use opencourse_db::models::lesson::CreateLesson;
use opencourse_db::models::user::CreateUser;
use opencourse_db::repositories::{
    CourseRepo, EnrollmentRepo, LessonProgressRepo, LessonRepo, UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str, role: Role) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "$argon2id$fake".to_string(),
        role,
        mobile_no: None,
    }
}

fn new_course(title: &str, price: f64) -> CreateCourse {
    CreateCourse {
        category_id: None,
        title: title.to_string(),
        description: None,
        price,
    }
}

fn new_lesson(course_id: i64, title: &str) -> CreateLesson {
    CreateLesson {
        course_id,
        title: title.to_string(),
        content: Some("content".to_string()),
    }
}

async fn seed_course_with_lessons(
    pool: &PgPool,
    title: &str,
    price: f64,
    lesson_count: usize,
) -> (i64, Vec<i64>) {
    let teacher = UserRepo::create(pool, &new_user(&format!("{title}-teacher"), Role::Teacher))
        .await
        .unwrap();
    let course = CourseRepo::create(pool, teacher.id, &new_course(title, price))
        .await
        .unwrap();
    let mut lesson_ids = Vec::new();
    for i in 0..lesson_count {
        let lesson = LessonRepo::create(pool, &new_lesson(course.id, &format!("Lesson {i}")))
            .await
            .unwrap();
        lesson_ids.push(lesson.id);
    }
    (course.id, lesson_ids)
}

// ---------------------------------------------------------------------------
// Enrollment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn enroll_creates_row_with_price_snapshot(pool: PgPool) {
    let (course_id, _) = seed_course_with_lessons(&pool, "Algebra 101", 49.0, 0).await;
    let student = UserRepo::create(&pool, &new_user("alice", Role::Student))
        .await
        .unwrap();

    let (enrollment, created) = EnrollmentRepo::get_or_create(&pool, student.id, course_id, 49.0)
        .await
        .unwrap();

    assert!(created);
    assert_eq!(enrollment.user_id, student.id);
    assert_eq!(enrollment.course_id, course_id);
    assert_eq!(enrollment.price, 49.0);
    assert_eq!(enrollment.progress, 0.0);
}

#[sqlx::test(migrations = "./migrations")]
async fn double_enroll_returns_existing_row(pool: PgPool) {
    let (course_id, _) = seed_course_with_lessons(&pool, "Algebra 101", 49.0, 0).await;
    let student = UserRepo::create(&pool, &new_user("alice", Role::Student))
        .await
        .unwrap();

    let (first, created_first) = EnrollmentRepo::get_or_create(&pool, student.id, course_id, 49.0)
        .await
        .unwrap();
    let (second, created_second) = EnrollmentRepo::get_or_create(&pool, student.id, course_id, 49.0)
        .await
        .unwrap();

    assert!(created_first);
    assert!(!created_second);
    assert_eq!(first.id, second.id);

    let total = EnrollmentRepo::count(&pool, Some(student.id)).await.unwrap();
    assert_eq!(total, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn enrollment_price_survives_course_price_change(pool: PgPool) {
    let (course_id, _) = seed_course_with_lessons(&pool, "Algebra 101", 49.0, 0).await;
    let student = UserRepo::create(&pool, &new_user("alice", Role::Student))
        .await
        .unwrap();
    let (enrollment, _) = EnrollmentRepo::get_or_create(&pool, student.id, course_id, 49.0)
        .await
        .unwrap();

    sqlx::query("UPDATE courses SET price = 99.0 WHERE id = $1")
        .bind(course_id)
        .execute(&pool)
        .await
        .unwrap();

    let reloaded = EnrollmentRepo::find_by_id(&pool, enrollment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.price, 49.0);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_detailed_scopes_to_user(pool: PgPool) {
    let (course_id, _) = seed_course_with_lessons(&pool, "Algebra 101", 49.0, 0).await;
    let alice = UserRepo::create(&pool, &new_user("alice", Role::Student))
        .await
        .unwrap();
    let bob = UserRepo::create(&pool, &new_user("bob", Role::Student))
        .await
        .unwrap();
    EnrollmentRepo::get_or_create(&pool, alice.id, course_id, 49.0)
        .await
        .unwrap();
    EnrollmentRepo::get_or_create(&pool, bob.id, course_id, 49.0)
        .await
        .unwrap();

    let all = EnrollmentRepo::list_detailed(&pool, None, 10, 0).await.unwrap();
    assert_eq!(all.len(), 2);

    let alices = EnrollmentRepo::list_detailed(&pool, Some(alice.id), 10, 0)
        .await
        .unwrap();
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].user_id, alice.id);
    assert_eq!(alices[0].course_title, "Algebra 101");
}

// ---------------------------------------------------------------------------
// Lesson completion and aggregate progress
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn completing_lessons_advances_progress(pool: PgPool) {
    let (course_id, lessons) = seed_course_with_lessons(&pool, "Algebra 101", 49.0, 4).await;
    let student = UserRepo::create(&pool, &new_user("alice", Role::Student))
        .await
        .unwrap();
    EnrollmentRepo::get_or_create(&pool, student.id, course_id, 49.0)
        .await
        .unwrap();

    let progress = LessonProgressRepo::complete_for_user(&pool, student.id, lessons[0])
        .await
        .unwrap();
    assert_eq!(progress, Some(25.0));

    let progress = LessonProgressRepo::complete_for_user(&pool, student.id, lessons[1])
        .await
        .unwrap();
    assert_eq!(progress, Some(50.0));

    LessonProgressRepo::complete_for_user(&pool, student.id, lessons[2])
        .await
        .unwrap();
    let progress = LessonProgressRepo::complete_for_user(&pool, student.id, lessons[3])
        .await
        .unwrap();
    assert_eq!(progress, Some(100.0));
}

#[sqlx::test(migrations = "./migrations")]
async fn recompleting_a_lesson_keeps_progress_stable(pool: PgPool) {
    let (course_id, lessons) = seed_course_with_lessons(&pool, "Algebra 101", 49.0, 4).await;
    let student = UserRepo::create(&pool, &new_user("alice", Role::Student))
        .await
        .unwrap();
    let (enrollment, _) = EnrollmentRepo::get_or_create(&pool, student.id, course_id, 49.0)
        .await
        .unwrap();

    LessonProgressRepo::complete_for_user(&pool, student.id, lessons[0])
        .await
        .unwrap();
    let progress = LessonProgressRepo::complete_for_user(&pool, student.id, lessons[0])
        .await
        .unwrap();
    assert_eq!(progress, Some(25.0));

    // One progress row per (enrollment, lesson), no matter how many calls.
    let rows = LessonProgressRepo::list_for_enrollment(&pool, enrollment.id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_completed);
}

#[sqlx::test(migrations = "./migrations")]
async fn completion_persists_on_enrollment_row(pool: PgPool) {
    let (course_id, lessons) = seed_course_with_lessons(&pool, "Algebra 101", 49.0, 4).await;
    let student = UserRepo::create(&pool, &new_user("alice", Role::Student))
        .await
        .unwrap();
    let (enrollment, _) = EnrollmentRepo::get_or_create(&pool, student.id, course_id, 49.0)
        .await
        .unwrap();

    LessonProgressRepo::complete_for_user(&pool, student.id, lessons[0])
        .await
        .unwrap();
    LessonProgressRepo::complete_for_user(&pool, student.id, lessons[1])
        .await
        .unwrap();
    LessonProgressRepo::complete_for_user(&pool, student.id, lessons[2])
        .await
        .unwrap();

    let reloaded = EnrollmentRepo::find_by_id(&pool, enrollment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.progress, 75.0);
}

#[sqlx::test(migrations = "./migrations")]
async fn completing_unknown_lesson_returns_none(pool: PgPool) {
    let student = UserRepo::create(&pool, &new_user("alice", Role::Student))
        .await
        .unwrap();

    let progress = LessonProgressRepo::complete_for_user(&pool, student.id, 424242)
        .await
        .unwrap();
    assert_eq!(progress, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn completing_without_enrollment_returns_none(pool: PgPool) {
    let (_, lessons) = seed_course_with_lessons(&pool, "Algebra 101", 49.0, 1).await;
    let student = UserRepo::create(&pool, &new_user("alice", Role::Student))
        .await
        .unwrap();

    // Not enrolled: the workflow must not create any progress rows.
    let progress = LessonProgressRepo::complete_for_user(&pool, student.id, lessons[0])
        .await
        .unwrap();
    assert_eq!(progress, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn progress_is_isolated_per_student(pool: PgPool) {
    let (course_id, lessons) = seed_course_with_lessons(&pool, "Algebra 101", 49.0, 2).await;
    let alice = UserRepo::create(&pool, &new_user("alice", Role::Student))
        .await
        .unwrap();
    let bob = UserRepo::create(&pool, &new_user("bob", Role::Student))
        .await
        .unwrap();
    EnrollmentRepo::get_or_create(&pool, alice.id, course_id, 49.0)
        .await
        .unwrap();
    let (bob_enrollment, _) = EnrollmentRepo::get_or_create(&pool, bob.id, course_id, 49.0)
        .await
        .unwrap();

    LessonProgressRepo::complete_for_user(&pool, alice.id, lessons[0])
        .await
        .unwrap();

    let bob_row = EnrollmentRepo::find_by_id(&pool, bob_enrollment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bob_row.progress, 0.0);
}

#[sqlx::test(migrations = "./migrations")]
async fn lesson_listing_reflects_completion_per_user(pool: PgPool) {
    let (course_id, lessons) = seed_course_with_lessons(&pool, "Algebra 101", 49.0, 2).await;
    let alice = UserRepo::create(&pool, &new_user("alice", Role::Student))
        .await
        .unwrap();
    EnrollmentRepo::get_or_create(&pool, alice.id, course_id, 49.0)
        .await
        .unwrap();
    LessonProgressRepo::complete_for_user(&pool, alice.id, lessons[0])
        .await
        .unwrap();

    let for_alice = LessonRepo::list_with_completion(&pool, Some(alice.id), 10, 0)
        .await
        .unwrap();
    assert!(for_alice.iter().any(|l| l.id == lessons[0] && l.completed));
    assert!(for_alice.iter().any(|l| l.id == lessons[1] && !l.completed));

    let anonymous = LessonRepo::list_with_completion(&pool, None, 10, 0)
        .await
        .unwrap();
    assert!(anonymous.iter().all(|l| !l.completed));
}
