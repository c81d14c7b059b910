pub mod action;
pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod log;
pub mod menu;
pub mod recap;
pub mod settings;
pub mod ssb;
pub mod students;
