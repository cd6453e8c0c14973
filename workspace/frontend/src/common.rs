pub mod error;
pub mod skeleton;
