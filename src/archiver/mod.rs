pub mod page;
pub mod progress;

pub use page::PageArchiver;
pub use progress::{ArchiveProgress, NoProgress};
