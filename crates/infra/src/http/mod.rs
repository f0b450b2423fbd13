//! Blocking HTTP transport and Basic authentication

pub mod auth;
pub mod client;

pub use auth::{basic_auth_header, encode_basic_token};
pub use client::{HttpClient, HttpClientBuilder};
