pub mod entities;
pub mod errors;

pub use entities::KitchenInventory;
pub use errors::KitchenError;
