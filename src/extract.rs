pub mod summary;
pub mod tokens;
