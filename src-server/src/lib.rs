pub mod api;
pub mod error;
pub mod main_lib;
