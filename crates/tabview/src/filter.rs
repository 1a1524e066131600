//! Substring filtering over configurable record fields.
//!
//! The engine hard-codes no field list; each dataset configures an ordered
//! set of [`FieldAccessor`]s that extract searchable strings from a record.
//! A record matches when at least one accessor yields a value containing the
//! query, case-insensitively.
//!
//! # Example
//!
//! ```rust
//! use tabview::filter::{field, matching_indices, FieldAccessor};
//!
//! struct Org { name: String, email: Option<String> }
//!
//! let orgs = vec![
//!     Org { name: "Acme".into(), email: Some("ops@acme.io".into()) },
//!     Org { name: "Globex".into(), email: None },
//! ];
//! let accessors: Vec<FieldAccessor<Org>> = vec![
//!     field(|o: &Org| Some(o.name.clone())),
//!     field(|o: &Org| o.email.clone()),
//! ];
//!
//! assert_eq!(matching_indices(&orgs, "ACME", &accessors), vec![0]);
//! assert_eq!(matching_indices(&orgs, "", &accessors), vec![0, 1]);
//! ```

/// Extracts a searchable string from a record; `None` means the field is
/// absent and never matches a non-empty query.
pub type FieldAccessor<R> = Box<dyn Fn(&R) -> Option<String> + Send + Sync>;

/// Adapts any closure yielding an optional stringifiable value into a
/// [`FieldAccessor`].
pub fn field<R, T, F>(accessor: F) -> FieldAccessor<R>
where
    F: Fn(&R) -> Option<T> + Send + Sync + 'static,
    T: ToString,
{
    Box::new(move |record| accessor(record).map(|value| value.to_string()))
}

/// Returns the indices of records matching `query`, in their original order.
///
/// A query that is empty after trimming matches everything: the result is
/// `0..records.len()`, the identity view over the input. Otherwise an index
/// is kept iff at least one accessor yields a value whose lowercased form
/// contains the lowercased query as a substring. The filter is stable; it
/// never reorders.
#[must_use]
pub fn matching_indices<R>(
    records: &[R],
    query: &str,
    accessors: &[FieldAccessor<R>],
) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return (0..records.len()).collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            accessors.iter().any(|accessor| {
                accessor(record).is_some_and(|value| value.to_lowercase().contains(&needle))
            })
        })
        .map(|(index, _)| index)
        .collect()
}
