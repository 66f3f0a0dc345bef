/********************************************************************************
 * Copyright (c) 2025 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

use crate::declare::{DeclareGate, DeclareProtocol};
use crate::lookup::{QueryFilterField, QueryProtocol, ReverseLookup};
use crate::observability::events;
use std::sync::Arc;
use topology_model::{
    AddBinding, AssociationIndex, BrokerProvisioner, DeclareExchangePoint, DeclareExchangeSpace,
    DeclarePublisher, DeclareQueue, DeclareSubscriber, DeclareTopic, ResourceIdentity,
    ResourceKind, ResourceStore, TopologyError, Undeclare,
};
use tracing::{debug, warn};

const COMPONENT: &str = "topology_service";

/// The topology control-plane service.
///
/// Exposes declare/undeclare/query for each declared-resource kind plus
/// binding creation. The service holds no durable state of its own; every
/// operation runs to completion as a sequence of awaited collaborator calls.
///
/// Declare operations are idempotent per name: a repeat declare returns the
/// existing reference and makes no provisioning call. The reverse-lookup
/// check and the create that follows it are serialized per `(kind, name)`,
/// so concurrent declares of one name converge on a single record.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use memory_registry::InMemoryRegistry;
/// use integration_test_utils::RecordingProvisioner;
/// use topology_model::DeclareExchangeSpace;
/// use topology_service::TopologyService;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let registry = Arc::new(InMemoryRegistry::new());
/// let provisioner = Arc::new(RecordingProvisioner::new());
/// let service = TopologyService::new(
///     "example",
///     registry.clone(),
///     registry,
///     provisioner,
/// );
///
/// let first = service
///     .declare_exchange_space(DeclareExchangeSpace {
///         exchange_space_name: "swapmeet".to_string(),
///     })
///     .await
///     .unwrap();
/// let second = service
///     .declare_exchange_space(DeclareExchangeSpace {
///         exchange_space_name: "swapmeet".to_string(),
///     })
///     .await
///     .unwrap();
/// assert_eq!(first, second);
/// # });
/// ```
pub struct TopologyService {
    name: String,
    store: Arc<dyn ResourceStore>,
    index: Arc<dyn AssociationIndex>,
    provisioner: Arc<dyn BrokerProvisioner>,
    reverse_lookup: ReverseLookup,
    gate: DeclareGate,
    query_filter: QueryFilterField,
}

impl TopologyService {
    pub fn new(
        name: &str,
        store: Arc<dyn ResourceStore>,
        index: Arc<dyn AssociationIndex>,
        provisioner: Arc<dyn BrokerProvisioner>,
    ) -> Self {
        Self {
            name: name.to_string(),
            reverse_lookup: ReverseLookup::new(store.clone(), index.clone()),
            store,
            index,
            provisioner,
            gate: DeclareGate::new(),
            query_filter: QueryFilterField::default(),
        }
    }

    /// Selects which field discovery queries match against; see
    /// [`QueryFilterField`].
    pub fn with_query_filter(mut self, query_filter: QueryFilterField) -> Self {
        self.query_filter = query_filter;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn declare_protocol(&self) -> DeclareProtocol<'_> {
        DeclareProtocol::new(
            &self.store,
            &self.provisioner,
            &self.reverse_lookup,
            &self.gate,
        )
    }

    fn log_declare_start(&self, kind: ResourceKind, name: &str) {
        debug!(
            event = events::DECLARE_START,
            component = COMPONENT,
            service = %self.name,
            kind = %kind,
            name,
        );
    }

    async fn query(
        &self,
        kind: ResourceKind,
        pattern: &str,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        QueryProtocol::new(&self.store, &self.index, self.query_filter)
            .run(kind, pattern)
            .await
    }

    /// Undeclare operations acknowledge without removing anything: the
    /// collaborator boundary defines no delete on the store and no release
    /// on the provisioner, so the record and its handle stay in place.
    fn acknowledge_undeclare(
        &self,
        kind: ResourceKind,
        request: &Undeclare,
    ) -> Result<(), TopologyError> {
        request.validate()?;
        warn!(
            event = events::UNDECLARE_ACK_NOOP,
            component = COMPONENT,
            service = %self.name,
            kind = %kind,
            reference = %request.reference,
            "undeclare acknowledged; record and provisioning handle retained"
        );
        Ok(())
    }

    /// Declares an exchange space; repeat declares of the same name return
    /// the existing reference.
    pub async fn declare_exchange_space(
        &self,
        request: DeclareExchangeSpace,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        request.validate()?;
        self.log_declare_start(ResourceKind::ExchangeSpace, &request.exchange_space_name);
        self.declare_protocol()
            .declare_exchange_space(&request.exchange_space_name)
            .await
    }

    pub async fn undeclare_exchange_space(&self, request: Undeclare) -> Result<(), TopologyError> {
        self.acknowledge_undeclare(ResourceKind::ExchangeSpace, &request)
    }

    /// Lists exchange-space references whose identity (or name, under the
    /// name query filter) matches the regex.
    pub async fn query_exchange_spaces(
        &self,
        pattern: &str,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        self.query(ResourceKind::ExchangeSpace, pattern).await
    }

    /// Declares an exchange point, a topic exchange nested under a space.
    /// The space reference must resolve before anything is provisioned.
    pub async fn declare_exchange_point(
        &self,
        request: DeclareExchangePoint,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        request.validate()?;
        self.log_declare_start(ResourceKind::ExchangePoint, &request.exchange_point_name);
        self.declare_protocol()
            .declare_exchange_point(&request.exchange_point_name, &request.exchange_space)
            .await
    }

    pub async fn undeclare_exchange_point(&self, request: Undeclare) -> Result<(), TopologyError> {
        self.acknowledge_undeclare(ResourceKind::ExchangePoint, &request)
    }

    pub async fn query_exchange_points(
        &self,
        pattern: &str,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        self.query(ResourceKind::ExchangePoint, pattern).await
    }

    /// Declares a topic in a given space/point. A topic is usually a
    /// dataset name.
    pub async fn declare_topic(
        &self,
        request: DeclareTopic,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        request.validate()?;
        self.log_declare_start(ResourceKind::Topic, &request.topic_name);
        self.declare_protocol()
            .declare_topic(
                &request.topic_name,
                &request.exchange_space,
                &request.exchange_point,
            )
            .await
    }

    pub async fn undeclare_topic(&self, request: Undeclare) -> Result<(), TopologyError> {
        self.acknowledge_undeclare(ResourceKind::Topic, &request)
    }

    pub async fn query_topics(
        &self,
        pattern: &str,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        self.query(ResourceKind::Topic, pattern).await
    }

    /// Declares a publisher role bound to a space/point/topic triple.
    pub async fn declare_publisher(
        &self,
        request: DeclarePublisher,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        request.validate()?;
        self.log_declare_start(ResourceKind::Publisher, &request.publisher_name);
        self.declare_protocol().declare_publisher(&request).await
    }

    pub async fn undeclare_publisher(&self, request: Undeclare) -> Result<(), TopologyError> {
        self.acknowledge_undeclare(ResourceKind::Publisher, &request)
    }

    pub async fn query_publishers(
        &self,
        pattern: &str,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        self.query(ResourceKind::Publisher, pattern).await
    }

    /// Declares a subscriber against a space/point/topic triple. The
    /// listener queue name is generated; every call creates a new resource.
    pub async fn declare_subscriber(
        &self,
        request: DeclareSubscriber,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        request.validate()?;
        self.declare_protocol().declare_subscriber(&request).await
    }

    pub async fn undeclare_subscriber(&self, request: Undeclare) -> Result<(), TopologyError> {
        self.acknowledge_undeclare(ResourceKind::Subscriber, &request)
    }

    pub async fn query_subscribers(
        &self,
        pattern: &str,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        self.query(ResourceKind::Subscriber, pattern).await
    }

    /// Declares a listener queue under a space/point/topic triple.
    pub async fn declare_queue(
        &self,
        request: DeclareQueue,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        request.validate()?;
        self.log_declare_start(ResourceKind::Queue, &request.queue_name);
        self.declare_protocol().declare_queue(&request).await
    }

    pub async fn undeclare_queue(&self, request: Undeclare) -> Result<(), TopologyError> {
        self.acknowledge_undeclare(ResourceKind::Queue, &request)
    }

    pub async fn query_queues(
        &self,
        pattern: &str,
    ) -> Result<Vec<ResourceIdentity>, TopologyError> {
        self.query(ResourceKind::Queue, pattern).await
    }

    /// Adds a binding to an existing queue, addressed by queue name.
    /// Replies with a bare acknowledgement rather than a reference list.
    pub async fn add_binding(&self, request: AddBinding) -> Result<(), TopologyError> {
        request.validate()?;
        self.log_declare_start(ResourceKind::Binding, &request.queue_name);
        self.declare_protocol()
            .add_binding(&request.queue_name, &request.binding_key)
            .await
    }
}
