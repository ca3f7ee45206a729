// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod blog;
