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

use crate::identity::ResourceIdentity;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Machine-readable code carried on every error reply.
///
/// `BadRequest` is the only code minted by the control plane itself; every
/// collaborator failure propagates unmodified under `Downstream`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCode {
    BadRequest,
    Downstream,
}

/// Failures from the resource store collaborator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    NotFound(ResourceIdentity),
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(identity) => {
                write!(f, "no resource record for identity {identity}")
            }
            StoreError::Unavailable(reason) => write!(f, "resource store unavailable: {reason}"),
        }
    }
}

impl Error for StoreError {}

/// Failures from the association index collaborator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IndexError {
    Unavailable(String),
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexError::Unavailable(reason) => write!(f, "association index unavailable: {reason}"),
        }
    }
}

impl Error for IndexError {}

/// Failures from the broker provisioner collaborator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProvisionError {
    Rejected(String),
    Unavailable(String),
}

impl Display for ProvisionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProvisionError::Rejected(reason) => {
                write!(f, "broker provisioner rejected the request: {reason}")
            }
            ProvisionError::Unavailable(reason) => {
                write!(f, "broker provisioner unavailable: {reason}")
            }
        }
    }
}

impl Error for ProvisionError {}

/// Error reply of a topology-service operation.
#[derive(Debug)]
pub enum TopologyError {
    /// Request shape violation, failed parent resolution, or a binding
    /// against a queue that does not exist. No side effects were taken.
    BadRequest(String),
    Store(StoreError),
    Index(IndexError),
    Provisioner(ProvisionError),
}

impl TopologyError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        TopologyError::BadRequest(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TopologyError::BadRequest(_) => ErrorCode::BadRequest,
            _ => ErrorCode::Downstream,
        }
    }
}

impl Display for TopologyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologyError::BadRequest(reason) => write!(f, "bad request: {reason}"),
            TopologyError::Store(err) => write!(f, "resource store failure: {err}"),
            TopologyError::Index(err) => write!(f, "association index failure: {err}"),
            TopologyError::Provisioner(err) => write!(f, "provisioning failure: {err}"),
        }
    }
}

impl Error for TopologyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TopologyError::BadRequest(_) => None,
            TopologyError::Store(err) => Some(err),
            TopologyError::Index(err) => Some(err),
            TopologyError::Provisioner(err) => Some(err),
        }
    }
}

impl From<StoreError> for TopologyError {
    fn from(err: StoreError) -> Self {
        TopologyError::Store(err)
    }
}

impl From<IndexError> for TopologyError {
    fn from(err: IndexError) -> Self {
        TopologyError::Index(err)
    }
}

impl From<ProvisionError> for TopologyError {
    fn from(err: ProvisionError) -> Self {
        TopologyError::Provisioner(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorCode, ProvisionError, StoreError, TopologyError};
    use crate::identity::ResourceIdentity;
    use std::error::Error;

    #[test]
    fn bad_request_is_the_only_locally_minted_code() {
        let local = TopologyError::bad_request("empty exchange_space_name");
        assert_eq!(local.code(), ErrorCode::BadRequest);
        assert!(local.source().is_none());

        let downstream =
            TopologyError::from(StoreError::NotFound(ResourceIdentity::new("xs-missing")));
        assert_eq!(downstream.code(), ErrorCode::Downstream);
        assert!(downstream.source().is_some());
    }

    #[test]
    fn display_keeps_the_collaborator_reason() {
        let err = TopologyError::from(ProvisionError::Unavailable("broker down".to_string()));
        assert!(err.to_string().contains("broker down"));
    }
}
