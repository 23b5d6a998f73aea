//! Request and response DTOs

pub mod common;
pub mod wallet;

pub use common::*;
pub use wallet::*;
