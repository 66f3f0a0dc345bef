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
use tracing::info;
use uuid::Uuid;

/// Dry-run provisioner: logs every physical creation it is asked for and
/// mints a handle without talking to a broker. Stands in for the real
/// provisioning layer so a topology description can be exercised end to end.
pub(crate) struct LoggingProvisioner;

impl LoggingProvisioner {
    fn mint(&self, object: &str, name: &str) -> ProvisioningHandle {
        let handle = ProvisioningHandle::new(format!("{object}-{}", Uuid::new_v4()));
        info!(object, name, handle = %handle, "provisioned broker object");
        handle
    }
}

#[async_trait]
impl BrokerProvisioner for LoggingProvisioner {
    async fn create_exchange_space(
        &self,
        name: &str,
        _description: &str,
    ) -> Result<ProvisioningHandle, ProvisionError> {
        Ok(self.mint("exchange-space", name))
    }

    async fn create_exchange_point(
        &self,
        name: &str,
        _description: &str,
        space_name: &str,
    ) -> Result<ProvisioningHandle, ProvisionError> {
        info!(space_name, "exchange point parented under space");
        Ok(self.mint("exchange-point", name))
    }

    async fn create_queue(
        &self,
        name: &str,
        _description: &str,
        space_name: &str,
        point_name: &str,
    ) -> Result<ProvisioningHandle, ProvisionError> {
        info!(space_name, point_name, "queue parented under space/point");
        Ok(self.mint("queue", name))
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
        info!(
            space_name,
            point_name, queue_name, topic_name, "binding routed through space/point"
        );
        Ok(self.mint("binding", name))
    }
}
