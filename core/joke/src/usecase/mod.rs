//! ユースケース層

pub mod app;
pub mod session;
