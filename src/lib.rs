// src/lib.rs
pub mod config;
pub mod resolver;
pub mod server;
