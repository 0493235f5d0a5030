//! Catalog of Earth-observation sample data and the fetch-or-placeholder
//! routine that populates a local data directory from it.

pub mod acquire;
pub mod catalog;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod metadata;
pub mod placeholder;
pub mod storage;
