pub mod category_repo;
pub mod course_repo;
pub mod enrollment_repo;
pub mod lesson_progress_repo;
pub mod lesson_repo;
pub mod material_repo;
pub mod question_answer_repo;
pub mod session_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use lesson_progress_repo::LessonProgressRepo;
pub use lesson_repo::LessonRepo;
pub use material_repo::MaterialRepo;
pub use question_answer_repo::QuestionAnswerRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
