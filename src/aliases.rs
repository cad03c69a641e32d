// src/aliases.rs
//! Re-exports secure-gate's secret wrappers
//!
//! Decrypted aircraft data is wiped from memory when the wrapper drops.

pub use secure_gate::dynamic_alias;

dynamic_alias!(PlainText, Vec<u8>);
