pub mod client;
pub mod skin_analyzer;
