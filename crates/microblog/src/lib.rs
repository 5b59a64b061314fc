//! A minimal single-admin microblog over SQLite.
//!
//! One table of entries, one configured admin login, and a guarded insert.
//! The binary wires a clap CLI around [`serve`] and the one-shot schema
//! bootstrap in [`microblog_db::Database::init_schema`].

pub mod api;
pub mod config;
pub mod logging;
pub mod serve;
