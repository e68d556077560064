//! Shared media types.

mod summary;
mod types;

pub use summary::MediaSummary;
pub use types::{MediaType, MovieRef, ShowRef};
