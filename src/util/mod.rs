#![warn(missing_docs)]

#[cfg(test)]
pub mod counter;
pub mod panic;
pub mod result;
