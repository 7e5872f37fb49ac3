pub mod error_chain;
