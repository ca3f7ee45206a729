// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_store;
pub mod migration_target;
pub mod time;
pub mod util;

pub use article_store::InMemoryArticleStore;
pub use migration_target::ScriptedTarget;
pub use time::fixed_now;
pub use util::{DummyClock, DummySlug};
