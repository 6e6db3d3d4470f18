pub mod health;
pub mod auth;
pub mod product;
pub mod category;
pub mod employee;
pub mod supplier;
pub mod client;
