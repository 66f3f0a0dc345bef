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

use crate::identity::{ProvisioningHandle, ResourceIdentity};
use crate::kind::ResourceKind;

/// Field-name tokens used for reverse lookups and name-mode queries.
///
/// Lookups address record fields by name string, not by accessor, so that the
/// reverse-lookup contract stays `find(kind, field_name, value)`.
pub mod fields {
    pub const EXCHANGE_SPACE_NAME: &str = "exchange_space_name";
    pub const EXCHANGE_POINT_NAME: &str = "exchange_point_name";
    pub const TOPIC_NAME: &str = "topic_name";
    pub const PUBLISHER_NAME: &str = "publisher_name";
    pub const QUEUE_NAME: &str = "queue_name";
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangeSpaceBody {
    pub name: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangePointBody {
    pub name: String,
    /// Resolved at declare time; the provisioner addresses broker objects by
    /// name, and the binding walk re-reads it without another resolution.
    pub space_name: String,
    pub space: ResourceIdentity,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TopicBody {
    pub name: String,
    pub space_name: String,
    pub point_name: String,
    pub space: ResourceIdentity,
    pub point: ResourceIdentity,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublisherBody {
    pub name: String,
    pub credentials: String,
    pub space: ResourceIdentity,
    pub point: ResourceIdentity,
    pub topic: ResourceIdentity,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubscriberBody {
    /// Generated, not caller-chosen.
    pub queue_name: String,
    pub space: ResourceIdentity,
    pub point: ResourceIdentity,
    pub topic: ResourceIdentity,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueueBody {
    pub name: String,
    pub space: ResourceIdentity,
    pub point: ResourceIdentity,
    pub topic: ResourceIdentity,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BindingBody {
    pub queue_name: String,
    pub binding_key: String,
    pub queue: ResourceIdentity,
}

/// Kind-specific payload of a resource record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResourceBody {
    ExchangeSpace(ExchangeSpaceBody),
    ExchangePoint(ExchangePointBody),
    Topic(TopicBody),
    Publisher(PublisherBody),
    Subscriber(SubscriberBody),
    Queue(QueueBody),
    Binding(BindingBody),
}

impl ResourceBody {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceBody::ExchangeSpace(_) => ResourceKind::ExchangeSpace,
            ResourceBody::ExchangePoint(_) => ResourceKind::ExchangePoint,
            ResourceBody::Topic(_) => ResourceKind::Topic,
            ResourceBody::Publisher(_) => ResourceKind::Publisher,
            ResourceBody::Subscriber(_) => ResourceKind::Subscriber,
            ResourceBody::Queue(_) => ResourceKind::Queue,
            ResourceBody::Binding(_) => ResourceKind::Binding,
        }
    }
}

/// A freshly created, not-yet-persisted resource.
///
/// Returned by [`ResourceStore::create`][crate::ResourceStore::create] with
/// the identity already minted; the caller attaches the body and the
/// provisioning handle and persists the finished record with `put`.
#[derive(Clone, Debug)]
pub struct ResourceDraft {
    identity: ResourceIdentity,
    label: String,
    kind: ResourceKind,
}

impl ResourceDraft {
    pub fn new(identity: ResourceIdentity, label: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            identity,
            label: label.into(),
            kind,
        }
    }

    pub fn identity(&self) -> &ResourceIdentity {
        &self.identity
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn into_record(
        self,
        body: ResourceBody,
        provisioning: Option<ProvisioningHandle>,
    ) -> ResourceRecord {
        debug_assert_eq!(self.kind, body.kind());
        ResourceRecord {
            identity: self.identity,
            label: self.label,
            provisioning,
            body,
        }
    }
}

/// One persisted logical resource.
///
/// Parent references and the identity are set once at creation and never
/// mutated; the record has only two states, absent and persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceRecord {
    identity: ResourceIdentity,
    label: String,
    provisioning: Option<ProvisioningHandle>,
    body: ResourceBody,
}

impl ResourceRecord {
    pub fn identity(&self) -> &ResourceIdentity {
        &self.identity
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> ResourceKind {
        self.body.kind()
    }

    pub fn provisioning(&self) -> Option<&ProvisioningHandle> {
        self.provisioning.as_ref()
    }

    pub fn body(&self) -> &ResourceBody {
        &self.body
    }

    /// Reads a field by its name token, the way the reverse lookup scans.
    ///
    /// Returns `None` when the record's kind does not carry the field.
    pub fn field(&self, field_name: &str) -> Option<&str> {
        match (&self.body, field_name) {
            (ResourceBody::ExchangeSpace(body), fields::EXCHANGE_SPACE_NAME) => Some(&body.name),
            (ResourceBody::ExchangePoint(body), fields::EXCHANGE_POINT_NAME) => Some(&body.name),
            (ResourceBody::ExchangePoint(body), fields::EXCHANGE_SPACE_NAME) => {
                Some(&body.space_name)
            }
            (ResourceBody::Topic(body), fields::TOPIC_NAME) => Some(&body.name),
            (ResourceBody::Topic(body), fields::EXCHANGE_SPACE_NAME) => Some(&body.space_name),
            (ResourceBody::Topic(body), fields::EXCHANGE_POINT_NAME) => Some(&body.point_name),
            (ResourceBody::Publisher(body), fields::PUBLISHER_NAME) => Some(&body.name),
            (ResourceBody::Subscriber(body), fields::QUEUE_NAME) => Some(&body.queue_name),
            (ResourceBody::Queue(body), fields::QUEUE_NAME) => Some(&body.name),
            (ResourceBody::Binding(body), fields::QUEUE_NAME) => Some(&body.queue_name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        fields, ExchangePointBody, ExchangeSpaceBody, QueueBody, ResourceBody, ResourceDraft,
        ResourceRecord,
    };
    use crate::identity::{ProvisioningHandle, ResourceIdentity};
    use crate::kind::ResourceKind;

    fn space_record(name: &str) -> ResourceRecord {
        ResourceDraft::new(
            ResourceIdentity::new("xs-1"),
            "Niemand",
            ResourceKind::ExchangeSpace,
        )
        .into_record(
            ResourceBody::ExchangeSpace(ExchangeSpaceBody {
                name: name.to_string(),
            }),
            Some(ProvisioningHandle::new("broker-xs-1")),
        )
    }

    #[test]
    fn field_reads_the_distinguishing_name() {
        let record = space_record("science_data");

        assert_eq!(record.field(fields::EXCHANGE_SPACE_NAME), Some("science_data"));
        assert_eq!(record.field(fields::TOPIC_NAME), None);
        assert_eq!(record.field("no_such_field"), None);
    }

    #[test]
    fn point_record_exposes_both_own_and_parent_name() {
        let record = ResourceDraft::new(
            ResourceIdentity::new("xp-1"),
            "Niemand",
            ResourceKind::ExchangePoint,
        )
        .into_record(
            ResourceBody::ExchangePoint(ExchangePointBody {
                name: "science_data".to_string(),
                space_name: "swapmeet".to_string(),
                space: ResourceIdentity::new("xs-1"),
            }),
            Some(ProvisioningHandle::new("broker-xp-1")),
        );

        assert_eq!(record.field(fields::EXCHANGE_POINT_NAME), Some("science_data"));
        assert_eq!(record.field(fields::EXCHANGE_SPACE_NAME), Some("swapmeet"));
    }

    #[test]
    fn queue_record_has_no_provisioning_handle_until_attached() {
        let record = ResourceDraft::new(
            ResourceIdentity::new("q-1"),
            "Niemand",
            ResourceKind::Queue,
        )
        .into_record(
            ResourceBody::Queue(QueueBody {
                name: "coads".to_string(),
                space: ResourceIdentity::new("xs-1"),
                point: ResourceIdentity::new("xp-1"),
                topic: ResourceIdentity::new("t-1"),
            }),
            None,
        );

        assert!(record.provisioning().is_none());
        assert_eq!(record.kind(), ResourceKind::Queue);
        assert_eq!(record.field(fields::QUEUE_NAME), Some("coads"));
    }
}
