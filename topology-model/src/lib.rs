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

//! # topology-model
//!
//! Shared vocabulary for the exchange-topology control plane: the seven
//! declared-resource kinds, resource records and identities, typed operation
//! requests, the error taxonomy, and the collaborator trait seams
//! ([`ResourceStore`], [`AssociationIndex`], [`BrokerProvisioner`]).
//!
//! The control-plane logic itself lives in `topology-service`; this crate
//! deliberately carries no runtime and no I/O so that collaborator
//! implementations and the service can depend on it from either side.

mod collaborators;
pub use collaborators::{AssociationIndex, BrokerProvisioner, ResourceStore};

mod error;
pub use error::{ErrorCode, IndexError, ProvisionError, StoreError, TopologyError};

mod identity;
pub use identity::{ProvisioningHandle, ResourceIdentity};

mod kind;
pub use kind::ResourceKind;

mod record;
pub use record::{
    fields, BindingBody, ExchangePointBody, ExchangeSpaceBody, PublisherBody, QueueBody,
    ResourceBody, ResourceDraft, ResourceRecord, SubscriberBody, TopicBody,
};

mod request;
pub use request::{
    AddBinding, DeclareExchangePoint, DeclareExchangeSpace, DeclarePublisher, DeclareQueue,
    DeclareSubscriber, DeclareTopic, Undeclare,
};
