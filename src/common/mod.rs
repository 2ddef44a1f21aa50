pub mod amount;
pub mod error;
pub mod event;
pub mod money;
