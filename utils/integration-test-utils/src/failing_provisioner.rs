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
use topology_model::{BrokerProvisioner, ProvisionError, ProvisioningHandle};
use tracing::debug;

/// Broker-provisioner double whose every creation fails as unavailable.
pub struct FailingProvisioner;

impl FailingProvisioner {
    fn refuse(&self, operation: &str) -> Result<ProvisioningHandle, ProvisionError> {
        debug!("refusing to provision: {operation}");
        Err(ProvisionError::Unavailable(format!(
            "{operation}: broker unreachable"
        )))
    }
}

#[async_trait]
impl BrokerProvisioner for FailingProvisioner {
    async fn create_exchange_space(
        &self,
        _name: &str,
        _description: &str,
    ) -> Result<ProvisioningHandle, ProvisionError> {
        self.refuse("create_exchange_space")
    }

    async fn create_exchange_point(
        &self,
        _name: &str,
        _description: &str,
        _space_name: &str,
    ) -> Result<ProvisioningHandle, ProvisionError> {
        self.refuse("create_exchange_point")
    }

    async fn create_queue(
        &self,
        _name: &str,
        _description: &str,
        _space_name: &str,
        _point_name: &str,
    ) -> Result<ProvisioningHandle, ProvisionError> {
        self.refuse("create_queue")
    }

    async fn create_binding(
        &self,
        _name: &str,
        _description: &str,
        _space_name: &str,
        _point_name: &str,
        _queue_name: &str,
        _topic_name: &str,
    ) -> Result<ProvisioningHandle, ProvisionError> {
        self.refuse("create_binding")
    }
}
