pub mod api;
pub mod config;
pub mod device;
pub mod error;
pub mod profiles;
pub mod recommend;
pub mod scoring;
pub mod session;
pub mod settings;
pub mod store;
// cmd and reports are binary modules (in main.rs); integration tests drive
// everything through the library modules above.
