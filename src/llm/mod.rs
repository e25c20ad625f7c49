pub mod client;
pub mod client_impl;
pub mod error;
pub mod factory;
pub mod prompts;
