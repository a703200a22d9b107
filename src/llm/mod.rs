mod client;
mod types;

pub use client::{GeminiClient, GenerationClient};
pub use types::*;
