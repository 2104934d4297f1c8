mod document;
mod filter;
mod kind;

pub use document::{Document, DocumentId, DocumentPatch, FileRef, DEFAULT_VERSION};
pub use filter::TypeFilter;
pub use kind::{describe, DocumentKind, TypeDescriptor, UNKNOWN_DESCRIPTOR};
