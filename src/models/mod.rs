pub mod app_state;
pub mod error;
pub mod leads;
pub mod participation;
pub mod prize;
pub mod quiz;
