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

//! In-memory implementation of the resource store and association index,
//! used by the bootstrap binary and by tests. Not a durable store: records
//! live for the lifetime of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use topology_model::{
    AssociationIndex, IndexError, ResourceDraft, ResourceIdentity, ResourceKind, ResourceRecord,
    ResourceStore, StoreError,
};
use uuid::Uuid;

struct RegistryState {
    records: HashMap<ResourceIdentity, ResourceRecord>,
    // Insertion-ordered, so scans and queries see records oldest-first.
    by_kind: HashMap<ResourceKind, Vec<ResourceIdentity>>,
}

/// Registry backing both collaborator seams with one coherent map: `put`
/// makes a record visible to `get` and to `subjects_of_type` atomically.
pub struct InMemoryRegistry {
    state: RwLock<RegistryState>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState {
                records: HashMap::new(),
                by_kind: HashMap::new(),
            }),
        }
    }

    /// Number of persisted records across all kinds.
    pub async fn record_count(&self) -> usize {
        self.state.read().await.records.len()
    }
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceStore for InMemoryRegistry {
    async fn create(&self, kind: ResourceKind, label: &str) -> Result<ResourceDraft, StoreError> {
        let identity = ResourceIdentity::new(format!("{}-{}", kind.as_str(), Uuid::new_v4()));
        Ok(ResourceDraft::new(identity, label, kind))
    }

    async fn get(&self, identity: &ResourceIdentity) -> Result<ResourceRecord, StoreError> {
        let state = self.state.read().await;
        state
            .records
            .get(identity)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(identity.clone()))
    }

    async fn put(&self, record: ResourceRecord) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let kind = record.kind();
        let identity = record.identity().clone();
        if state.records.insert(identity.clone(), record).is_none() {
            state.by_kind.entry(kind).or_default().push(identity);
        }
        Ok(())
    }

    fn reference(&self, record: &ResourceRecord) -> ResourceIdentity {
        record.identity().clone()
    }
}

#[async_trait]
impl AssociationIndex for InMemoryRegistry {
    async fn subjects_of_type(
        &self,
        kind: ResourceKind,
    ) -> Result<Vec<ResourceIdentity>, IndexError> {
        let state = self.state.read().await;
        Ok(state.by_kind.get(&kind).cloned().unwrap_or_default())
    }
}
