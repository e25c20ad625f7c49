//! algoskel - Generate algorithm practice skeletons with an LLM
//!
//! Prompts an OpenAI-compatible chat-completions endpoint for a problem's
//! skeleton (signatures, TODOs, tests) in a chosen language, strips the
//! reply down to source text and writes it with a header banner. A one-shot
//! request is tried first; if that call fails, the problem info is fetched
//! separately and the skeleton is generated from it.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod llm;
pub mod pipeline;
pub mod util;
