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

//! # topology-service
//!
//! `topology-service` is the control plane for a topic-routed message-broker
//! topology. Distributed service processes use it to declare, discover, and
//! query the logical objects of a publish/subscribe exchange: exchange
//! spaces, exchange points (topic exchanges), topics, publishers,
//! subscribers, queues, and bindings.
//!
//! Typical usage is API-first and centered on [`TopologyService`]. The
//! service is stateless per request; all durable state lives behind the
//! collaborator seams from `topology-model` —
//! [`ResourceStore`][topology_model::ResourceStore],
//! [`AssociationIndex`][topology_model::AssociationIndex], and
//! [`BrokerProvisioner`][topology_model::BrokerProvisioner].
//!
//! Declares are idempotent: a second declare of the same name returns the
//! existing reference without touching the provisioner. The
//! check-then-act window is serialized per `(kind, name)` so that concurrent
//! declares of one name produce exactly one record and one provisioning
//! call.
//!
//! ## Internal architecture map
//!
//! - API facade: outward [`TopologyService`] surface, request validation,
//!   and reply assembly
//! - Declare: declare-or-find orchestration, parent resolution, and the
//!   per-name declare gate
//! - Lookup: the scan-based reverse-lookup index and the regex discovery
//!   query
//!
//! ## Observability model
//!
//! The workspace uses `tracing` for logs/events. Library code emits
//! events/spans and does not unconditionally initialize a global subscriber.
//! Binaries and tests are responsible for one-time `tracing_subscriber`
//! initialization at process boundaries.

mod declare;

mod lookup;
pub use lookup::QueryFilterField;

#[doc(hidden)]
pub mod observability;

mod service;
pub use service::TopologyService;
