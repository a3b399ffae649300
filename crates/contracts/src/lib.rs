pub mod catalog;
pub mod org;
pub mod sales;
pub mod shared;
pub mod system;
