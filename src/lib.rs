//! Blog subsystem of the weekly diet planner: article storage over the hosted
//! Postgres backend, the HTTP API used by the public blog and the admin page,
//! and the one-shot schema migration runner.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod migration;
pub mod presentation;
