pub mod client;

pub use client::OpenFoodFactsClient;
