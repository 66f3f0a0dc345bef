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

//! Typed operation requests.
//!
//! The wire layer used tagged message envelopes and rejected a mismatched
//! tag up front; with typed requests the remaining shape check is that every
//! required field is non-empty. `validate` is called first in every
//! operation and produces the bad-request reply before any side effect.

use crate::error::TopologyError;
use crate::identity::ResourceIdentity;

fn require(field: &str, value: &str) -> Result<(), TopologyError> {
    if value.is_empty() {
        return Err(TopologyError::bad_request(format!("empty {field}")));
    }
    Ok(())
}

fn require_reference(field: &str, identity: &ResourceIdentity) -> Result<(), TopologyError> {
    if identity.is_empty() {
        return Err(TopologyError::bad_request(format!("empty {field} reference")));
    }
    Ok(())
}

#[derive(Clone, Debug)]
pub struct DeclareExchangeSpace {
    pub exchange_space_name: String,
}

impl DeclareExchangeSpace {
    pub fn validate(&self) -> Result<(), TopologyError> {
        require("exchange_space_name", &self.exchange_space_name)
    }
}

#[derive(Clone, Debug)]
pub struct DeclareExchangePoint {
    pub exchange_point_name: String,
    pub exchange_space: ResourceIdentity,
}

impl DeclareExchangePoint {
    pub fn validate(&self) -> Result<(), TopologyError> {
        require("exchange_point_name", &self.exchange_point_name)?;
        require_reference("exchange_space", &self.exchange_space)
    }
}

#[derive(Clone, Debug)]
pub struct DeclareTopic {
    pub topic_name: String,
    pub exchange_space: ResourceIdentity,
    pub exchange_point: ResourceIdentity,
}

impl DeclareTopic {
    pub fn validate(&self) -> Result<(), TopologyError> {
        require("topic_name", &self.topic_name)?;
        require_reference("exchange_space", &self.exchange_space)?;
        require_reference("exchange_point", &self.exchange_point)
    }
}

#[derive(Clone, Debug)]
pub struct DeclarePublisher {
    pub publisher_name: String,
    pub credentials: String,
    pub exchange_space: ResourceIdentity,
    pub exchange_point: ResourceIdentity,
    pub topic: ResourceIdentity,
}

impl DeclarePublisher {
    pub fn validate(&self) -> Result<(), TopologyError> {
        require("publisher_name", &self.publisher_name)?;
        require("credentials", &self.credentials)?;
        require_reference("exchange_space", &self.exchange_space)?;
        require_reference("exchange_point", &self.exchange_point)?;
        require_reference("topic", &self.topic)
    }
}

#[derive(Clone, Debug)]
pub struct DeclareSubscriber {
    pub exchange_space: ResourceIdentity,
    pub exchange_point: ResourceIdentity,
    pub topic: ResourceIdentity,
}

impl DeclareSubscriber {
    pub fn validate(&self) -> Result<(), TopologyError> {
        require_reference("exchange_space", &self.exchange_space)?;
        require_reference("exchange_point", &self.exchange_point)?;
        require_reference("topic", &self.topic)
    }
}

#[derive(Clone, Debug)]
pub struct DeclareQueue {
    pub queue_name: String,
    pub exchange_space: ResourceIdentity,
    pub exchange_point: ResourceIdentity,
    pub topic: ResourceIdentity,
}

impl DeclareQueue {
    pub fn validate(&self) -> Result<(), TopologyError> {
        require("queue_name", &self.queue_name)?;
        require_reference("exchange_space", &self.exchange_space)?;
        require_reference("exchange_point", &self.exchange_point)?;
        require_reference("topic", &self.topic)
    }
}

/// Binding creation addresses its queue by name, not by reference; the
/// service resolves the queue itself and rejects the request when the queue
/// was never declared.
#[derive(Clone, Debug)]
pub struct AddBinding {
    pub queue_name: String,
    pub binding_key: String,
}

impl AddBinding {
    pub fn validate(&self) -> Result<(), TopologyError> {
        require("queue_name", &self.queue_name)?;
        require("binding_key", &self.binding_key)
    }
}

/// Generic undeclare request, one per declared kind on the service facade.
#[derive(Clone, Debug)]
pub struct Undeclare {
    pub reference: ResourceIdentity,
}

impl Undeclare {
    pub fn validate(&self) -> Result<(), TopologyError> {
        require_reference("resource", &self.reference)
    }
}

#[cfg(test)]
mod tests {
    use super::{AddBinding, DeclareExchangePoint, DeclareExchangeSpace, DeclarePublisher};
    use crate::error::ErrorCode;
    use crate::identity::ResourceIdentity;

    #[test]
    fn empty_name_is_a_bad_request() {
        let request = DeclareExchangeSpace {
            exchange_space_name: String::new(),
        };

        let err = request.validate().unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadRequest);
    }

    #[test]
    fn empty_parent_reference_is_a_bad_request() {
        let request = DeclareExchangePoint {
            exchange_point_name: "science_data".to_string(),
            exchange_space: ResourceIdentity::new(""),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn publisher_requires_credentials() {
        let request = DeclarePublisher {
            publisher_name: "instrument-17".to_string(),
            credentials: String::new(),
            exchange_space: ResourceIdentity::new("xs"),
            exchange_point: ResourceIdentity::new("xp"),
            topic: ResourceIdentity::new("t"),
        };

        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("credentials"));
    }

    #[test]
    fn well_formed_binding_request_passes() {
        let request = AddBinding {
            queue_name: "coads-listener".to_string(),
            binding_key: "test.pydap.org:coads.nc".to_string(),
        };

        assert!(request.validate().is_ok());
    }
}
