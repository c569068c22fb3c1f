//! Vacancy collector core library.
//!
//! Pulls employers and their vacancies from the hh.ru listing API, persists
//! them into PostgreSQL with insert-if-absent semantics, and answers a fixed
//! set of report queries over the store. The `collector` binary wires these
//! pieces together behind an interactive menu.

pub mod config;
pub mod db;
pub mod ingest;
pub mod listing;
pub mod menu;
pub mod models;
pub mod reports;
pub mod test_dependencies;

pub use config::Config;
