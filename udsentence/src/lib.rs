mod error;
pub use crate::error::IdError;

pub mod sentence;

pub mod token;
