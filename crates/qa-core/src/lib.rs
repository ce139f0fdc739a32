//! qa-core - Core library for QA Edit
//!
//! This crate contains the record model, the backend API client, attachment
//! preview logic, and the form controller used to edit question & answer
//! posts. Frontends supply a [`form::FormView`] implementation.

pub mod api;
pub mod attachment;
pub mod config;
pub mod error;
pub mod form;
pub mod models;

pub use error::{Error, Result};
pub use models::{AttachmentIntent, QaRecord, QaType, SelectedFile};
