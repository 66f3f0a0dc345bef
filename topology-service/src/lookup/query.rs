//! Regex discovery queries over the declared resources of one kind.

use crate::observability::events;
use regex::Regex;
use std::sync::Arc;
use topology_model::{AssociationIndex, ResourceIdentity, ResourceKind, ResourceStore, TopologyError};
use tracing::debug;

const COMPONENT: &str = "query_protocol";

/// Which field a discovery query matches the pattern against.
///
/// Identity filtering searches the opaque identity strings and is the
/// compatibility default; name filtering searches the record's
/// distinguishing name, which is how callers address resources everywhere
/// else.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum QueryFilterField {
    /// Match the pattern against the opaque identity string.
    #[default]
    Identity,
    /// Match the pattern against the record's distinguishing name field.
    /// Costs one record fetch per candidate, like the reverse lookup.
    Name,
}

/// Runs one discovery query: fetch all identities of a kind, filter
/// client-side with regex *search* semantics (a match anywhere counts).
///
/// An empty pattern therefore matches every identity; that is standard
/// search behavior and deliberately not special-cased.
pub(crate) struct QueryProtocol<'a> {
    store: &'a Arc<dyn ResourceStore>,
    index: &'a Arc<dyn AssociationIndex>,
    filter: QueryFilterField,
}

impl<'a> QueryProtocol<'a> {
    pub(crate) fn new(
        store: &'a Arc<dyn ResourceStore>,
        index: &'a Arc<dyn AssociationIndex>,
        filter: QueryFilterField,
    ) -> Self {
        Self {
            store,
            index,
            filter,
        }
    }

    pub(crate) async fn run(
        &self,
        kind: ResourceKind,
        pattern: &str,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        let matcher = Regex::new(pattern)
            .map_err(|err| TopologyError::bad_request(format!("invalid regex: {err}")))?;

        let subjects = self.index.subjects_of_type(kind).await?;
        let candidates = subjects.len();

        debug!(
            event = events::QUERY_START,
            component = COMPONENT,
            kind = %kind,
            pattern,
            candidates,
        );

        let mut matches = Vec::new();
        for identity in subjects {
            let matched = match self.filter {
                QueryFilterField::Identity => matcher.is_match(identity.as_str()),
                QueryFilterField::Name => {
                    let record = self.store.get(&identity).await?;
                    record
                        .field(kind.name_field())
                        .is_some_and(|name| matcher.is_match(name))
                }
            };
            if matched {
                matches.push(identity);
            }
        }

        debug!(
            event = events::QUERY_DONE,
            component = COMPONENT,
            kind = %kind,
            matched = matches.len(),
            candidates,
        );
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::{QueryFilterField, QueryProtocol};
    use memory_registry::InMemoryRegistry;
    use std::sync::Arc;
    use topology_model::{
        AssociationIndex, ExchangeSpaceBody, ResourceBody, ResourceKind, ResourceStore,
        TopologyError,
    };

    async fn seed_space(registry: &Arc<InMemoryRegistry>, name: &str) {
        let draft = registry
            .create(ResourceKind::ExchangeSpace, "Niemand")
            .await
            .expect("draft");
        registry
            .put(draft.into_record(
                ResourceBody::ExchangeSpace(ExchangeSpaceBody {
                    name: name.to_string(),
                }),
                None,
            ))
            .await
            .expect("put");
    }

    #[tokio::test]
    async fn empty_pattern_matches_every_identity() {
        let registry = Arc::new(InMemoryRegistry::new());
        seed_space(&registry, "swapmeet").await;
        seed_space(&registry, "science_data").await;

        let store: Arc<dyn ResourceStore> = registry.clone();
        let index: Arc<dyn AssociationIndex> = registry.clone();
        let query = QueryProtocol::new(&store, &index, QueryFilterField::Identity);

        let matches = query
            .run(ResourceKind::ExchangeSpace, "")
            .await
            .expect("query should succeed");
        assert_eq!(matches.len(), 2);
    }

    #[tokio::test]
    async fn unmatched_pattern_yields_an_empty_list() {
        let registry = Arc::new(InMemoryRegistry::new());
        seed_space(&registry, "swapmeet").await;

        let store: Arc<dyn ResourceStore> = registry.clone();
        let index: Arc<dyn AssociationIndex> = registry.clone();
        let query = QueryProtocol::new(&store, &index, QueryFilterField::Identity);

        let matches = query
            .run(ResourceKind::ExchangeSpace, "zzz-no-match")
            .await
            .expect("query should succeed");
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn name_mode_filters_on_the_distinguishing_name() {
        let registry = Arc::new(InMemoryRegistry::new());
        seed_space(&registry, "science_data").await;
        seed_space(&registry, "instrument_commands").await;

        let store: Arc<dyn ResourceStore> = registry.clone();
        let index: Arc<dyn AssociationIndex> = registry.clone();
        let query = QueryProtocol::new(&store, &index, QueryFilterField::Name);

        let matches = query
            .run(ResourceKind::ExchangeSpace, ".*data.*")
            .await
            .expect("query should succeed");
        assert_eq!(matches.len(), 1);

        let record = registry.get(&matches[0]).await.expect("record");
        assert_eq!(
            record.field(topology_model::fields::EXCHANGE_SPACE_NAME),
            Some("science_data")
        );
    }

    #[tokio::test]
    async fn invalid_regex_is_a_bad_request() {
        let registry = Arc::new(InMemoryRegistry::new());
        let store: Arc<dyn ResourceStore> = registry.clone();
        let index: Arc<dyn AssociationIndex> = registry.clone();
        let query = QueryProtocol::new(&store, &index, QueryFilterField::Identity);

        let err = query
            .run(ResourceKind::ExchangeSpace, "(unclosed")
            .await
            .unwrap_err();
        assert!(matches!(err, TopologyError::BadRequest(_)));
    }
}
