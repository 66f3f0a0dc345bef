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

use serde::{Deserialize, Serialize};
use topology_service::QueryFilterField;

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub(crate) service_config: ServiceConfig,
    pub(crate) topology: TopologyLayout,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) query_filter: QueryFilterMode,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum QueryFilterMode {
    #[default]
    Identity,
    Name,
}

impl From<QueryFilterMode> for QueryFilterField {
    fn from(mode: QueryFilterMode) -> Self {
        match mode {
            QueryFilterMode::Identity => QueryFilterField::Identity,
            QueryFilterMode::Name => QueryFilterField::Name,
        }
    }
}

/// The topology to declare at startup, in dependency order. Parents are
/// referenced by name; the bootstrap resolves them against what it has
/// already declared.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct TopologyLayout {
    #[serde(default)]
    pub(crate) exchange_spaces: Vec<SpaceLayout>,
    #[serde(default)]
    pub(crate) exchange_points: Vec<PointLayout>,
    #[serde(default)]
    pub(crate) topics: Vec<TopicLayout>,
    #[serde(default)]
    pub(crate) queues: Vec<QueueLayout>,
    #[serde(default)]
    pub(crate) bindings: Vec<BindingLayout>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SpaceLayout {
    pub(crate) name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct PointLayout {
    pub(crate) name: String,
    pub(crate) exchange_space: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct TopicLayout {
    pub(crate) name: String,
    pub(crate) exchange_space: String,
    pub(crate) exchange_point: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct QueueLayout {
    pub(crate) name: String,
    pub(crate) exchange_space: String,
    pub(crate) exchange_point: String,
    pub(crate) topic: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BindingLayout {
    pub(crate) queue: String,
    pub(crate) binding_key: String,
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn parses_a_full_topology_description() {
        let text = r#"
        {
            service_config: { name: "bootstrap", query_filter: "name" },
            topology: {
                exchange_spaces: [{ name: "swapmeet" }],
                exchange_points: [{ name: "science_data", exchange_space: "swapmeet" }],
                topics: [{
                    name: "coads",
                    exchange_space: "swapmeet",
                    exchange_point: "science_data",
                }],
                queues: [{
                    name: "coads-listener",
                    exchange_space: "swapmeet",
                    exchange_point: "science_data",
                    topic: "coads",
                }],
                bindings: [{ queue: "coads-listener", binding_key: "coads.nc" }],
            },
        }
        "#;

        let config: Config = json5::from_str(text).expect("config should parse");
        assert_eq!(config.topology.exchange_spaces.len(), 1);
        assert_eq!(config.topology.bindings[0].queue, "coads-listener");
    }

    #[test]
    fn omitted_sections_default_to_empty() {
        let text = r#"
        {
            service_config: { name: "bootstrap" },
            topology: { exchange_spaces: [{ name: "swapmeet" }] },
        }
        "#;

        let config: Config = json5::from_str(text).expect("config should parse");
        assert!(config.topology.bindings.is_empty());
        assert!(matches!(
            config.service_config.query_filter,
            super::QueryFilterMode::Identity
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let text = r#"
        {
            service_config: { name: "bootstrap", verbosity: 3 },
            topology: {},
        }
        "#;

        assert!(json5::from_str::<Config>(text).is_err());
    }
}
