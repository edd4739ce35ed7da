//! Domain entities exposed by the notice tracking service layer.

pub mod client;
pub mod notice;
pub mod session;
pub mod storage;
pub mod types;
