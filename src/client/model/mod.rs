pub mod assignment;
pub mod cache;
pub mod error;
pub mod recommendations;
