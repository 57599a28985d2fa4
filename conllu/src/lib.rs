mod error;
pub use crate::error::DecodeError;

pub mod fields;

pub mod io;

pub mod line;

pub mod paragraph;
