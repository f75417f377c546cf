//! HTTP client layer — `ContentGemHttp`, a single-shot JSON transport.

pub mod client;

pub use client::ContentGemHttp;
