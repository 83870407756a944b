pub mod entry;
pub mod month;
pub mod project;

pub use entry::{Entry, EntryKind, WorkTimes};
pub use month::{DAYS_PER_MONTH, Month, Year};
pub use project::{Project, ProjectDirectory};
