//! Domain types shared by the preset service and the admin client.

pub mod catalog;
pub mod error;
pub mod preset;
pub mod types;
