mod kv;
mod memory;
mod redis;
mod sqlite;

pub use kv::*;
pub use memory::*;
pub use self::redis::*;
pub use sqlite::*;

/// SQL migration for the key/value schema
pub const MIGRATION_001_KV: &str = include_str!("migrations/001_kv.sql");
