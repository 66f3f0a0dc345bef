//! Declare-or-find orchestration across the store, index, and provisioner.

mod gate;
pub(crate) use gate::DeclareGate;

use crate::lookup::ReverseLookup;
use crate::observability::events;
use chrono::Utc;
use std::sync::Arc;
use topology_model::{
    fields, BindingBody, BrokerProvisioner, DeclarePublisher, DeclareQueue, DeclareSubscriber,
    ExchangePointBody, ExchangeSpaceBody, ProvisioningHandle, PublisherBody, QueueBody,
    ResourceBody, ResourceIdentity, ResourceKind, ResourceRecord, ResourceStore, StoreError,
    SubscriberBody, TopicBody, TopologyError,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

const COMPONENT: &str = "declare_protocol";

/// Placeholder record label for resources that have no display name of
/// their own.
const PLACEHOLDER_LABEL: &str = "Niemand";

/// Placeholder broker-object name used when provisioning a binding.
const BINDING_PLACEHOLDER_NAME: &str = "NoName";

/// Description attached to every physically provisioned broker object.
fn timestamp_description() -> String {
    format!("declared {}", Utc::now().to_rfc3339())
}

/// The distinguishing name of a record; total over every kind.
fn distinguishing_name(record: &ResourceRecord) -> String {
    record
        .field(record.kind().name_field())
        .unwrap_or_default()
        .to_string()
}

/// Orchestrates one declare operation across the collaborator seams.
///
/// Constructed per call by the service facade; borrows the owners so the
/// facade keeps a single copy of each collaborator handle.
pub(crate) struct DeclareProtocol<'a> {
    store: &'a Arc<dyn ResourceStore>,
    provisioner: &'a Arc<dyn BrokerProvisioner>,
    reverse_lookup: &'a ReverseLookup,
    gate: &'a DeclareGate,
}

impl<'a> DeclareProtocol<'a> {
    pub(crate) fn new(
        store: &'a Arc<dyn ResourceStore>,
        provisioner: &'a Arc<dyn BrokerProvisioner>,
        reverse_lookup: &'a ReverseLookup,
        gate: &'a DeclareGate,
    ) -> Self {
        Self {
            store,
            provisioner,
            reverse_lookup,
            gate,
        }
    }

    /// Fetches a parent record and checks its kind.
    ///
    /// A reference that does not resolve, or resolves to the wrong kind, is
    /// a bad request; any other store failure propagates unchanged.
    async fn resolve_parent(
        &self,
        reference: &ResourceIdentity,
        expected: ResourceKind,
    ) -> Result<ResourceRecord, TopologyError> {
        let record = match self.store.get(reference).await {
            Ok(record) => record,
            Err(StoreError::NotFound(identity)) => {
                return Err(TopologyError::bad_request(format!(
                    "unresolved {expected} reference {identity}"
                )));
            }
            Err(err) => return Err(err.into()),
        };

        if record.kind() != expected {
            return Err(TopologyError::bad_request(format!(
                "reference {} is a {}, expected {expected}",
                record.identity(),
                record.kind()
            )));
        }
        Ok(record)
    }

    /// Creates, populates, and persists a record, returning its reference.
    ///
    /// A store failure after a successful provisioning call is not rolled
    /// back; the orphaned handle is logged so an out-of-band reconciliation
    /// pass can find it.
    async fn persist(
        &self,
        kind: ResourceKind,
        body: ResourceBody,
        provisioning: Option<ProvisioningHandle>,
    ) -> Result<ResourceIdentity, TopologyError> {
        let orphan_watch = provisioning.clone();

        let outcome = async {
            let draft = self.store.create(kind, PLACEHOLDER_LABEL).await?;
            let record = draft.into_record(body, provisioning);
            self.store.put(record.clone()).await?;
            Ok::<_, StoreError>(self.store.reference(&record))
        }
        .await;

        match outcome {
            Ok(reference) => {
                info!(
                    event = events::DECLARE_PERSIST_OK,
                    component = COMPONENT,
                    kind = %kind,
                    identity = %reference,
                );
                Ok(reference)
            }
            Err(err) => {
                if let Some(handle) = orphan_watch {
                    warn!(
                        event = events::DECLARE_PERSIST_FAILED_AFTER_PROVISION,
                        component = COMPONENT,
                        kind = %kind,
                        orphaned_handle = %handle,
                        error = %err,
                    );
                }
                Err(err.into())
            }
        }
    }

    pub(crate) async fn declare_exchange_space(
        &self,
        name: &str,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        let kind = ResourceKind::ExchangeSpace;
        let _guard = self.gate.acquire(kind, name).await;

        if let Some(existing) = self
            .reverse_lookup
            .find(kind, fields::EXCHANGE_SPACE_NAME, name)
            .await?
        {
            info!(
                event = events::DECLARE_REUSE,
                component = COMPONENT,
                kind = %kind,
                name,
                identity = %existing,
            );
            return Ok(vec![existing]);
        }

        let handle = self
            .provisioner
            .create_exchange_space(name, &timestamp_description())
            .await?;
        debug!(
            event = events::DECLARE_PROVISION_OK,
            component = COMPONENT,
            kind = %kind,
            name,
            handle = %handle,
        );

        let reference = self
            .persist(
                kind,
                ResourceBody::ExchangeSpace(ExchangeSpaceBody {
                    name: name.to_string(),
                }),
                Some(handle),
            )
            .await?;
        Ok(vec![reference])
    }

    pub(crate) async fn declare_exchange_point(
        &self,
        name: &str,
        space: &ResourceIdentity,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        let kind = ResourceKind::ExchangePoint;
        let _guard = self.gate.acquire(kind, name).await;

        if let Some(existing) = self
            .reverse_lookup
            .find(kind, fields::EXCHANGE_POINT_NAME, name)
            .await?
        {
            info!(
                event = events::DECLARE_REUSE,
                component = COMPONENT,
                kind = %kind,
                name,
                identity = %existing,
            );
            return Ok(vec![existing]);
        }

        let space_record = self
            .resolve_parent(space, ResourceKind::ExchangeSpace)
            .await?;
        let space_name = distinguishing_name(&space_record);

        let handle = self
            .provisioner
            .create_exchange_point(name, &timestamp_description(), &space_name)
            .await?;
        debug!(
            event = events::DECLARE_PROVISION_OK,
            component = COMPONENT,
            kind = %kind,
            name,
            handle = %handle,
        );

        let reference = self
            .persist(
                kind,
                ResourceBody::ExchangePoint(ExchangePointBody {
                    name: name.to_string(),
                    space_name,
                    space: space.clone(),
                }),
                Some(handle),
            )
            .await?;
        Ok(vec![reference])
    }

    pub(crate) async fn declare_topic(
        &self,
        name: &str,
        space: &ResourceIdentity,
        point: &ResourceIdentity,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        let kind = ResourceKind::Topic;
        let _guard = self.gate.acquire(kind, name).await;

        if let Some(existing) = self
            .reverse_lookup
            .find(kind, fields::TOPIC_NAME, name)
            .await?
        {
            info!(
                event = events::DECLARE_REUSE,
                component = COMPONENT,
                kind = %kind,
                name,
                identity = %existing,
            );
            return Ok(vec![existing]);
        }

        let space_record = self
            .resolve_parent(space, ResourceKind::ExchangeSpace)
            .await?;
        let point_record = self
            .resolve_parent(point, ResourceKind::ExchangePoint)
            .await?;

        // Topics are routing-key scopes; the broker object comes into being
        // with the first queue bound into it, so there is no provisioning
        // call here.
        let reference = self
            .persist(
                kind,
                ResourceBody::Topic(TopicBody {
                    name: name.to_string(),
                    space_name: distinguishing_name(&space_record),
                    point_name: distinguishing_name(&point_record),
                    space: space.clone(),
                    point: point.clone(),
                }),
                None,
            )
            .await?;
        Ok(vec![reference])
    }

    pub(crate) async fn declare_publisher(
        &self,
        request: &DeclarePublisher,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        let kind = ResourceKind::Publisher;
        let _guard = self.gate.acquire(kind, &request.publisher_name).await;

        if let Some(existing) = self
            .reverse_lookup
            .find(kind, fields::PUBLISHER_NAME, &request.publisher_name)
            .await?
        {
            info!(
                event = events::DECLARE_REUSE,
                component = COMPONENT,
                kind = %kind,
                name = %request.publisher_name,
                identity = %existing,
            );
            return Ok(vec![existing]);
        }

        self.resolve_parent(&request.exchange_space, ResourceKind::ExchangeSpace)
            .await?;
        self.resolve_parent(&request.exchange_point, ResourceKind::ExchangePoint)
            .await?;
        self.resolve_parent(&request.topic, ResourceKind::Topic)
            .await?;

        let reference = self
            .persist(
                kind,
                ResourceBody::Publisher(PublisherBody {
                    name: request.publisher_name.clone(),
                    credentials: request.credentials.clone(),
                    space: request.exchange_space.clone(),
                    point: request.exchange_point.clone(),
                    topic: request.topic.clone(),
                }),
                None,
            )
            .await?;
        Ok(vec![reference])
    }

    pub(crate) async fn declare_subscriber(
        &self,
        request: &DeclareSubscriber,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        let kind = ResourceKind::Subscriber;

        // No distinguishing name, so no reverse lookup and no gate: every
        // subscription is its own resource with a generated queue name.
        self.resolve_parent(&request.exchange_space, ResourceKind::ExchangeSpace)
            .await?;
        self.resolve_parent(&request.exchange_point, ResourceKind::ExchangePoint)
            .await?;
        self.resolve_parent(&request.topic, ResourceKind::Topic)
            .await?;

        let queue_name = format!("subscriber-queue-{}", Uuid::new_v4());
        debug!(
            event = events::SUBSCRIBER_QUEUE_NAME_GENERATED,
            component = COMPONENT,
            queue_name = %queue_name,
        );

        let reference = self
            .persist(
                kind,
                ResourceBody::Subscriber(SubscriberBody {
                    queue_name,
                    space: request.exchange_space.clone(),
                    point: request.exchange_point.clone(),
                    topic: request.topic.clone(),
                }),
                None,
            )
            .await?;
        Ok(vec![reference])
    }

    pub(crate) async fn declare_queue(
        &self,
        request: &DeclareQueue,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        let kind = ResourceKind::Queue;
        let _guard = self.gate.acquire(kind, &request.queue_name).await;

        if let Some(existing) = self
            .reverse_lookup
            .find(kind, fields::QUEUE_NAME, &request.queue_name)
            .await?
        {
            info!(
                event = events::DECLARE_REUSE,
                component = COMPONENT,
                kind = %kind,
                name = %request.queue_name,
                identity = %existing,
            );
            return Ok(vec![existing]);
        }

        let space_record = self
            .resolve_parent(&request.exchange_space, ResourceKind::ExchangeSpace)
            .await?;
        let point_record = self
            .resolve_parent(&request.exchange_point, ResourceKind::ExchangePoint)
            .await?;
        self.resolve_parent(&request.topic, ResourceKind::Topic)
            .await?;

        let handle = self
            .provisioner
            .create_queue(
                &request.queue_name,
                &timestamp_description(),
                &distinguishing_name(&space_record),
                &distinguishing_name(&point_record),
            )
            .await?;
        debug!(
            event = events::DECLARE_PROVISION_OK,
            component = COMPONENT,
            kind = %kind,
            name = %request.queue_name,
            handle = %handle,
        );

        let reference = self
            .persist(
                kind,
                ResourceBody::Queue(QueueBody {
                    name: request.queue_name.clone(),
                    space: request.exchange_space.clone(),
                    point: request.exchange_point.clone(),
                    topic: request.topic.clone(),
                }),
                Some(handle),
            )
            .await?;
        Ok(vec![reference])
    }

    /// Binding creation addresses its queue by name; a queue that was never
    /// declared is a bad request, not a downstream fault.
    pub(crate) async fn add_binding(
        &self,
        queue_name: &str,
        binding_key: &str,
    ) -> Result<(), TopologyError> {
        let Some(queue_identity) = self
            .reverse_lookup
            .find(ResourceKind::Queue, fields::QUEUE_NAME, queue_name)
            .await?
        else {
            warn!(
                event = events::BINDING_QUEUE_MISSING,
                component = COMPONENT,
                queue_name,
            );
            return Err(TopologyError::bad_request(format!(
                "no queue named {queue_name}"
            )));
        };

        let queue_record = self
            .resolve_parent(&queue_identity, ResourceKind::Queue)
            .await?;
        let queue_body = match queue_record.body() {
            ResourceBody::Queue(body) => body,
            _ => {
                return Err(TopologyError::bad_request(format!(
                    "resource {} is not a queue",
                    queue_record.identity()
                )))
            }
        };

        let space_record = self
            .resolve_parent(&queue_body.space, ResourceKind::ExchangeSpace)
            .await?;
        let point_record = self
            .resolve_parent(&queue_body.point, ResourceKind::ExchangePoint)
            .await?;
        let topic_record = self
            .resolve_parent(&queue_body.topic, ResourceKind::Topic)
            .await?;

        let handle = self
            .provisioner
            .create_binding(
                BINDING_PLACEHOLDER_NAME,
                &timestamp_description(),
                &distinguishing_name(&space_record),
                &distinguishing_name(&point_record),
                queue_name,
                &distinguishing_name(&topic_record),
            )
            .await?;
        debug!(
            event = events::DECLARE_PROVISION_OK,
            component = COMPONENT,
            kind = %ResourceKind::Binding,
            name = queue_name,
            handle = %handle,
        );

        self.persist(
            ResourceKind::Binding,
            ResourceBody::Binding(BindingBody {
                queue_name: queue_name.to_string(),
                binding_key: binding_key.to_string(),
                queue: self.store.reference(&queue_record),
            }),
            Some(handle),
        )
        .await?;

        info!(
            event = events::BINDING_PERSIST_OK,
            component = COMPONENT,
            queue_name,
            binding_key,
        );
        Ok(())
    }
}
