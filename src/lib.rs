//! Personal finance entry and summary: a session ledger of income and
//! expense records fed by free-text amount shorthand such as `20k`, `50rb`
//! or `1,5jt`.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
