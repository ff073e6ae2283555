pub mod client;
pub mod username;

pub use client::{GitHubClient, GitHubFetcher};
