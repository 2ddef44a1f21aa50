pub mod clear;
pub mod submit;
