mod client;

pub use client::{RregAsyncClient, RregAsyncClientBuilder};
