pub mod exams;
pub mod filter;
pub mod paginate;
pub mod search;
pub mod sort;

pub use crate::domain::model::Record;
pub use crate::domain::ports::UniversityRepository;
pub use crate::utils::error::Result;
