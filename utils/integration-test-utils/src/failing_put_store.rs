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

use async_trait::async_trait;
use std::sync::Arc;
use topology_model::{
    ResourceDraft, ResourceIdentity, ResourceKind, ResourceRecord, ResourceStore, StoreError,
};
use tracing::debug;

/// Store wrapper whose `put` always fails, for driving the
/// provision-then-persist partial-failure path. Reads and drafts pass
/// through to the wrapped store.
pub struct FailingPutStore {
    inner: Arc<dyn ResourceStore>,
}

impl FailingPutStore {
    pub fn new(inner: Arc<dyn ResourceStore>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ResourceStore for FailingPutStore {
    async fn create(&self, kind: ResourceKind, label: &str) -> Result<ResourceDraft, StoreError> {
        self.inner.create(kind, label).await
    }

    async fn get(&self, identity: &ResourceIdentity) -> Result<ResourceRecord, StoreError> {
        self.inner.get(identity).await
    }

    async fn put(&self, record: ResourceRecord) -> Result<(), StoreError> {
        debug!("dropping put of {}", record.identity());
        Err(StoreError::Unavailable(
            "store rejected the write".to_string(),
        ))
    }

    fn reference(&self, record: &ResourceRecord) -> ResourceIdentity {
        self.inner.reference(record)
    }
}
