// src/lib.rs
pub mod app;
pub mod client;
pub mod config;
pub mod health;
pub mod inventory;
pub mod models;
pub mod report;
