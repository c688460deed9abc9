pub mod health;
pub mod leads;
pub mod participation;
pub mod prize;
pub mod quiz;
