pub mod category;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod lesson_progress;
pub mod material;
pub mod question_answer;
pub mod session;
pub mod user;
