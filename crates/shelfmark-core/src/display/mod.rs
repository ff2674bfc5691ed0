//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]);
//! this module adds newtype wrappers for collections and operation results so
//! the same data can be formatted for lists, creation confirmations, and
//! status messages without presentation logic leaking into the models.
//!
//! All formatters produce markdown, which the CLI renders through its
//! terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Books, Friends, Loans, ...)
//! - [`results`]: Operation result types (CreateResult, DeleteResult)
//! - [`status`]: One-line write confirmations (Confirmation)
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Books, Friends, Loans, OverdueLoans};
pub use results::{CreateResult, DeleteResult};
pub use status::Confirmation;
