//! Domain logic - version parsing and classification, independent of any I/O

pub mod bump;
pub mod prerelease;
pub mod track;
pub mod version;

pub use bump::BumpType;
pub use prerelease::PrereleaseId;
pub use track::{classify, Classification, Track};
pub use version::{ParsedVersion, MAX_SAFE_INTEGER};
