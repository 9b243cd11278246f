pub mod exchange;
pub mod sentiment;
