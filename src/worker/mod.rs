pub mod handlers;
pub mod processor;
