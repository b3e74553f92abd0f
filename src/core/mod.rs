pub mod entry;
pub mod search_response;

pub use entry::{Definition, DictEntry};
pub use search_response::{SearchHit, SearchResponse};
