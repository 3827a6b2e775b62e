//! DTOs for questions_sea adapter.

#[derive(Debug, Clone)]
pub struct QuestionCreate {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}
