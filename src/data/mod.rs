mod adapter;
mod loader;
mod portrait;

pub use adapter::{normalize, parse_leading_int};
pub use loader::{DEFAULT_DATA_URL, DataSource, DatasetCache};
pub use portrait::portrait_url;
