//! Plain data shared by every part of the office: service kinds, actor tags
//! and the events written to the log.

pub mod event;
pub mod service;

pub use event::*;
pub use service::*;
