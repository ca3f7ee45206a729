pub mod database;
pub mod migration_target;
pub mod repositories;
pub mod time;
pub mod util;
