pub mod application;
pub mod domain;
pub mod http;
pub mod storage;

pub use domain::*;
pub use storage::{DynKvStore, KvStore};
