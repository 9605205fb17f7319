pub mod client;
pub mod mapper;
pub mod types;

pub use client::UpbitClient;
