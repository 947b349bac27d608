pub mod context;
pub mod control;
