pub mod user;
pub mod product;
pub mod category;
pub mod employee;
pub mod supplier;
pub mod client;
