pub mod activity;
pub mod answers;
pub mod result;
pub mod sex;

pub use activity::PhysicalActivity;
pub use answers::AnswerRecord;
pub use result::{TestResult, TestScore};
pub use sex::Sex;
