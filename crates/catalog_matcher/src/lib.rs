mod error;
mod filter;
mod item;
mod matcher;
mod statistics;

pub use error::CatalogError;
pub use filter::CatalogFilter;
pub use item::{CatalogItem, RawCatalog};
pub use matcher::{CatalogMatcher, DEFAULT_TOP_N, MatchResult};
pub use statistics::{CatalogBreakdown, CatalogStatistics};
