mod client;
pub(crate) mod common;

pub use client::{RregClient, RregClientBuilder};
