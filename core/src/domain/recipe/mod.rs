pub mod catalog;
pub mod compatibility;
pub mod entities;
pub mod helpers;
pub mod ports;
pub mod scoring;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
