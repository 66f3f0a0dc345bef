//! Discovery lookups: the scan-based reverse index and the regex query.

mod query;
pub use query::QueryFilterField;
pub(crate) use query::QueryProtocol;

mod reverse_lookup;
pub(crate) use reverse_lookup::ReverseLookup;
