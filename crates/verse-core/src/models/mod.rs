pub mod degradation_event;
pub mod embedding;
pub mod group;
pub mod record;
pub mod search_outcome;

pub use degradation_event::DegradationEvent;
pub use embedding::Embedding;
pub use group::Group;
pub use record::{Record, ScoredRecord};
pub use search_outcome::{SearchMode, SearchOutcome};
