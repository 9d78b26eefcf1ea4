mod adjacency;
mod index;
mod iter;
mod profile;

pub use adjacency::AdjacencyList;
pub use index::ProfileIndex;
pub use iter::InOrder;
pub use profile::{ProfileEntry, UserId, UserProfile};
