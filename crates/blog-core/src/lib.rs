//! # Blog Core
//!
//! The domain layer of the blog content API.
//! Entities, ports and use cases live here; storage and transport are
//! supplied from outside through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod usecase;

pub use error::{DomainError, RepoError};
