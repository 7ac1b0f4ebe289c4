pub mod common;
pub mod favorite;
pub mod kitchen;
pub mod profile;
pub mod recipe;
