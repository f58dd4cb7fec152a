//! 持久化层，基于 SQLite 的仓储实现

pub mod sqlite;
