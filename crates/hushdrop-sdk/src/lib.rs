//! Campaign and claim workflows for hushdrop.
//!
//! Everything here reads and writes files; the cryptographic work lives in `hushdrop-tree`.

pub mod commands;
pub mod common;
