//! Snippet definitions - the values stored in the library.
//!
//! - **SnippetId**: stable identifier of one snippet
//! - **SnippetEntry**: one record from content data
//! - **ExamineEffect**: opaque payload run when a snippet is examined

mod effect;
mod entry;
mod id;

pub use effect::*;
pub use entry::*;
pub use id::*;
