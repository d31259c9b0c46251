//! Data models shared by the engine and its front ends.

pub mod config;
pub mod statement;
