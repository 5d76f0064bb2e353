// src/instagram/mod.rs
pub mod client;
pub mod models;

pub use client::FetchOptions;
pub use models::Username;
