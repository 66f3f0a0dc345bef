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
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use topology_model::{BrokerProvisioner, ProvisionError, ProvisioningHandle};
use tracing::debug;

/// One physical creation the provisioner was asked to perform.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProvisionCall {
    ExchangeSpace {
        name: String,
    },
    ExchangePoint {
        name: String,
        space_name: String,
    },
    Queue {
        name: String,
        space_name: String,
        point_name: String,
    },
    Binding {
        name: String,
        space_name: String,
        point_name: String,
        queue_name: String,
        topic_name: String,
    },
}

/// Broker-provisioner double that records every creation request and hands
/// back deterministic handles (`broker-object-1`, `broker-object-2`, ...).
pub struct RecordingProvisioner {
    calls: Mutex<Vec<ProvisionCall>>,
    next_handle: AtomicUsize,
}

impl RecordingProvisioner {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_handle: AtomicUsize::new(1),
        }
    }

    pub fn calls(&self) -> Vec<ProvisionCall> {
        self.calls.lock().expect("recording provisioner poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("recording provisioner poisoned").len()
    }

    fn record(&self, call: ProvisionCall) -> ProvisioningHandle {
        debug!("provisioning: {call:?}");
        self.calls
            .lock()
            .expect("recording provisioner poisoned")
            .push(call);
        let n = self.next_handle.fetch_add(1, Ordering::SeqCst);
        ProvisioningHandle::new(format!("broker-object-{n}"))
    }
}

impl Default for RecordingProvisioner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BrokerProvisioner for RecordingProvisioner {
    async fn create_exchange_space(
        &self,
        name: &str,
        _description: &str,
    ) -> Result<ProvisioningHandle, ProvisionError> {
        Ok(self.record(ProvisionCall::ExchangeSpace {
            name: name.to_string(),
        }))
    }

    async fn create_exchange_point(
        &self,
        name: &str,
        _description: &str,
        space_name: &str,
    ) -> Result<ProvisioningHandle, ProvisionError> {
        Ok(self.record(ProvisionCall::ExchangePoint {
            name: name.to_string(),
            space_name: space_name.to_string(),
        }))
    }

    async fn create_queue(
        &self,
        name: &str,
        _description: &str,
        space_name: &str,
        point_name: &str,
    ) -> Result<ProvisioningHandle, ProvisionError> {
        Ok(self.record(ProvisionCall::Queue {
            name: name.to_string(),
            space_name: space_name.to_string(),
            point_name: point_name.to_string(),
        }))
    }

    async fn create_binding(
        &self,
        name: &str,
        _description: &str,
        space_name: &str,
        point_name: &str,
        queue_name: &str,
        topic_name: &str,
    ) -> Result<ProvisioningHandle, ProvisionError> {
        Ok(self.record(ProvisionCall::Binding {
            name: name.to_string(),
            space_name: space_name.to_string(),
            point_name: point_name.to_string(),
            queue_name: queue_name.to_string(),
            topic_name: topic_name.to_string(),
        }))
    }
}
