//! Gateway implementations.

pub mod gemini;

pub use gemini::GeminiProvider;
