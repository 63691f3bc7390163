pub mod analysis;
pub mod endpoint;
pub mod search;
pub mod sentinel;
pub mod status;
pub mod summarize;
