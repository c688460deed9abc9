pub mod defaults;
pub mod promo;
pub mod quiz;
pub mod wheel;
