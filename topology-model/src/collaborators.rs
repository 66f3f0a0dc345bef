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

use crate::error::{IndexError, ProvisionError, StoreError};
use crate::identity::{ProvisioningHandle, ResourceIdentity};
use crate::kind::ResourceKind;
use crate::record::{ResourceDraft, ResourceRecord};
use async_trait::async_trait;

/// Versioned object store holding the logical resource records.
///
/// The store is the only party that mints identities. The control plane
/// suspends at every call; no mutual exclusion is implied by the trait.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Creates an empty draft of `kind` with a freshly minted identity.
    async fn create(&self, kind: ResourceKind, label: &str) -> Result<ResourceDraft, StoreError>;

    /// Fetches the persisted record behind an identity.
    async fn get(&self, identity: &ResourceIdentity) -> Result<ResourceRecord, StoreError>;

    /// Persists a finished record.
    async fn put(&self, record: ResourceRecord) -> Result<(), StoreError>;

    /// Produces the opaque reference handed back to callers.
    fn reference(&self, record: &ResourceRecord) -> ResourceIdentity;
}

/// Answers "which resource identities have kind T" via a type-of predicate
/// query. Point lookups do not exist at this boundary; the reverse-lookup
/// index scans on top of it.
#[async_trait]
pub trait AssociationIndex: Send + Sync {
    async fn subjects_of_type(&self, kind: ResourceKind) -> Result<Vec<ResourceIdentity>, IndexError>;
}

/// Performs the physical creation of broker objects.
///
/// The provisioner addresses broker objects by human-readable name, not by
/// resource identity; declare operations resolve parent names before calling
/// in. There is deliberately no removal operation at this boundary.
#[async_trait]
pub trait BrokerProvisioner: Send + Sync {
    async fn create_exchange_space(
        &self,
        name: &str,
        description: &str,
    ) -> Result<ProvisioningHandle, ProvisionError>;

    async fn create_exchange_point(
        &self,
        name: &str,
        description: &str,
        space_name: &str,
    ) -> Result<ProvisioningHandle, ProvisionError>;

    async fn create_queue(
        &self,
        name: &str,
        description: &str,
        space_name: &str,
        point_name: &str,
    ) -> Result<ProvisioningHandle, ProvisionError>;

    #[allow(clippy::too_many_arguments)]
    async fn create_binding(
        &self,
        name: &str,
        description: &str,
        space_name: &str,
        point_name: &str,
        queue_name: &str,
        topic_name: &str,
    ) -> Result<ProvisioningHandle, ProvisionError>;
}
