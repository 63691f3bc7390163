pub mod domains;
pub mod error;
pub mod sections;
pub mod validate;
pub mod verdict;
