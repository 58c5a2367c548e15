//! Business logic for the component catalog: input validation, date
//! stamping, user-facing result messages, and settings shared by front ends.

pub mod error;
pub mod librarian;
pub mod settings;

pub use error::{LibrarianError, ValidationError};
pub use librarian::{
    feedback, normalize, today, validate, ComponentRef, Confirmation, Librarian,
};
pub use librarian_catalog::{Component, NewComponent};
pub use librarian_db::ComponentFilter;
