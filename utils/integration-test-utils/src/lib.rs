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

//! Collaborator doubles for exercising the topology control plane in tests.

mod recording_provisioner;
pub use recording_provisioner::{ProvisionCall, RecordingProvisioner};

mod failing_provisioner;
pub use failing_provisioner::FailingProvisioner;

mod failing_put_store;
pub use failing_put_store::FailingPutStore;
