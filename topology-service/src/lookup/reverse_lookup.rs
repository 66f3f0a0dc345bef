//! Reverse-lookup index: find a resource by the value of a named field.

use crate::observability::events;
use std::sync::Arc;
use topology_model::{AssociationIndex, ResourceIdentity, ResourceKind, ResourceStore, TopologyError};
use tracing::debug;

const COMPONENT: &str = "reverse_lookup";

/// Linear-scan point lookup built on top of the association index.
///
/// The index only answers "all identities of kind T", so a lookup fetches
/// every record of the kind and compares the named field by exact equality.
/// Cost is O(n) in the number of resources of the kind per call — a known
/// scalability ceiling of this boundary, not a defect of the scan.
pub(crate) struct ReverseLookup {
    store: Arc<dyn ResourceStore>,
    index: Arc<dyn AssociationIndex>,
}

impl ReverseLookup {
    pub(crate) fn new(store: Arc<dyn ResourceStore>, index: Arc<dyn AssociationIndex>) -> Self {
        Self { store, index }
    }

    /// Returns the identity of the first record of `kind` whose `field_name`
    /// equals `value`, or `None` when the scan completes without a match.
    ///
    /// Not-found is an internal signal; callers decide whether it means
    /// "go ahead and create" or a bad request.
    pub(crate) async fn find(
        &self,
        kind: ResourceKind,
        field_name: &str,
        value: &str,
    ) -> Result<Option<ResourceIdentity>, TopologyError> {
        let subjects = self.index.subjects_of_type(kind).await?;

        debug!(
            event = events::REVERSE_LOOKUP_SCAN,
            component = COMPONENT,
            kind = %kind,
            field_name,
            candidates = subjects.len(),
        );

        for identity in subjects {
            let record = self.store.get(&identity).await?;
            if record.field(field_name) == Some(value) {
                debug!(
                    event = events::REVERSE_LOOKUP_HIT,
                    component = COMPONENT,
                    kind = %kind,
                    field_name,
                    identity = %record.identity(),
                );
                return Ok(Some(record.identity().clone()));
            }
        }

        debug!(
            event = events::REVERSE_LOOKUP_MISS,
            component = COMPONENT,
            kind = %kind,
            field_name,
        );
        Ok(None)
    }
}
