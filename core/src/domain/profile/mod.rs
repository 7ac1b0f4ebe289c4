pub mod entities;
pub mod tables;

pub use entities::*;
pub use tables::DietaryTables;
