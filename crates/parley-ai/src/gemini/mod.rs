//! Google Gemini gateway.
//!
//! Implements `ModelGateway` for Gemini models via the Generative Language
//! API (`generateContent`, non-streaming).

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::GeminiConfig;
