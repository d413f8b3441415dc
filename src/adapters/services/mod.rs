//! Remote service adapters
pub mod llm;
