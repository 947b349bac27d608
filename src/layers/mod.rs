pub mod base;
pub mod manager;
pub mod tile;
pub mod zone;
