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

use crate::record::fields;
use std::fmt::{Display, Formatter};

/// The seven declared-resource kinds of the exchange topology.
///
/// They form a DAG: a point lives under a space, a topic under a space/point
/// pair, publishers/subscribers/queues under a space/point/topic triple, and
/// a binding references a queue.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ResourceKind {
    ExchangeSpace,
    ExchangePoint,
    Topic,
    Publisher,
    Subscriber,
    Queue,
    Binding,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::ExchangeSpace => "exchange_space",
            ResourceKind::ExchangePoint => "exchange_point",
            ResourceKind::Topic => "topic",
            ResourceKind::Publisher => "publisher",
            ResourceKind::Subscriber => "subscriber",
            ResourceKind::Queue => "queue",
            ResourceKind::Binding => "binding",
        }
    }

    /// The field carrying the kind's distinguishing name, where one exists.
    ///
    /// Subscribers have no caller-chosen name (their queue name is generated),
    /// so they are not addressable by name; the field returned here is still
    /// the one a name-mode discovery query matches against.
    pub fn name_field(&self) -> &'static str {
        match self {
            ResourceKind::ExchangeSpace => fields::EXCHANGE_SPACE_NAME,
            ResourceKind::ExchangePoint => fields::EXCHANGE_POINT_NAME,
            ResourceKind::Topic => fields::TOPIC_NAME,
            ResourceKind::Publisher => fields::PUBLISHER_NAME,
            ResourceKind::Subscriber => fields::QUEUE_NAME,
            ResourceKind::Queue => fields::QUEUE_NAME,
            ResourceKind::Binding => fields::QUEUE_NAME,
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
