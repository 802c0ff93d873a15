//! Core types for the UltraDNS REST API.
//!
//! This crate provides the foundational types shared by the UltraDNS tooling:
//!
//! - **Types**: [`NameServer`], the name server record of a zone (address plus TSIG key)
//! - **Validation**: [`Validator`], the field checks the record itself never enforces
//! - **Errors**: Error handling with [`UltraError`]
//!
//! # Example
//!
//! ```rust
//! use ultra_core::NameServer;
//!
//! let ns = NameServer::with_tsig("192.0.2.1", "key-a.example.", "c2VjcmV0");
//! assert_eq!(
//!     ns.to_string(),
//!     "NameServer{ip=192.0.2.1, tsigKey=key-a.example., tsigKeyValue=c2VjcmV0}"
//! );
//! assert!(ns.validate().is_ok());
//! ```

#![doc(html_root_url = "https://docs.rs/ultra-core/0.1.0")]

mod error;
pub mod types;
pub mod validate;

pub use error::{Result, UltraError, ValidationIssue};
pub use types::*;
pub use validate::Validator;
