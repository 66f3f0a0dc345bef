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

mod config;
mod provisioner;

use crate::config::Config;
use crate::provisioner::LoggingProvisioner;
use clap::Parser;
use memory_registry::InMemoryRegistry;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::sync::Arc;
use topology_model::{
    AddBinding, DeclareExchangePoint, DeclareExchangeSpace, DeclareQueue, DeclareTopic,
    ResourceIdentity, TopologyError,
};
use topology_service::TopologyService;
use tracing::info;

#[derive(Parser)]
#[command()]
struct BootstrapArgs {
    #[arg(short, long, value_name = "FILE")]
    config: String,
}

fn resolve<'a>(
    declared: &'a HashMap<String, ResourceIdentity>,
    kind: &str,
    name: &str,
) -> Result<&'a ResourceIdentity, TopologyError> {
    declared.get(name).ok_or_else(|| {
        TopologyError::bad_request(format!("{kind} \"{name}\" is not declared by this layout"))
    })
}

fn single(references: Vec<ResourceIdentity>) -> ResourceIdentity {
    references
        .into_iter()
        .next()
        .expect("declare replies with one reference")
}

#[tokio::main]
async fn main() -> Result<(), TopologyError> {
    let _ = tracing_subscriber::fmt::try_init();

    info!("Started topology-bootstrap");

    let args = BootstrapArgs::parse();
    let mut file = File::open(args.config)
        .map_err(|e| TopologyError::bad_request(format!("File not found: {e:?}")))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| TopologyError::bad_request(format!("Unable to read config file: {e:?}")))?;

    let config: Config = json5::from_str(&contents)
        .map_err(|e| TopologyError::bad_request(format!("Unable to parse config file: {e:?}")))?;

    let registry = Arc::new(InMemoryRegistry::new());
    let service = TopologyService::new(
        &config.service_config.name,
        registry.clone(),
        registry.clone(),
        Arc::new(LoggingProvisioner),
    )
    .with_query_filter(config.service_config.query_filter.clone().into());

    let mut spaces: HashMap<String, ResourceIdentity> = HashMap::new();
    for space in &config.topology.exchange_spaces {
        let references = service
            .declare_exchange_space(DeclareExchangeSpace {
                exchange_space_name: space.name.clone(),
            })
            .await?;
        spaces.insert(space.name.clone(), single(references));
    }

    let mut points: HashMap<String, ResourceIdentity> = HashMap::new();
    for point in &config.topology.exchange_points {
        let space = resolve(&spaces, "exchange space", &point.exchange_space)?;
        let references = service
            .declare_exchange_point(DeclareExchangePoint {
                exchange_point_name: point.name.clone(),
                exchange_space: space.clone(),
            })
            .await?;
        points.insert(point.name.clone(), single(references));
    }

    let mut topics: HashMap<String, ResourceIdentity> = HashMap::new();
    for topic in &config.topology.topics {
        let space = resolve(&spaces, "exchange space", &topic.exchange_space)?;
        let point = resolve(&points, "exchange point", &topic.exchange_point)?;
        let references = service
            .declare_topic(DeclareTopic {
                topic_name: topic.name.clone(),
                exchange_space: space.clone(),
                exchange_point: point.clone(),
            })
            .await?;
        topics.insert(topic.name.clone(), single(references));
    }

    for queue in &config.topology.queues {
        let space = resolve(&spaces, "exchange space", &queue.exchange_space)?;
        let point = resolve(&points, "exchange point", &queue.exchange_point)?;
        let topic = resolve(&topics, "topic", &queue.topic)?;
        service
            .declare_queue(DeclareQueue {
                queue_name: queue.name.clone(),
                exchange_space: space.clone(),
                exchange_point: point.clone(),
                topic: topic.clone(),
            })
            .await?;
    }

    for binding in &config.topology.bindings {
        service
            .add_binding(AddBinding {
                queue_name: binding.queue.clone(),
                binding_key: binding.binding_key.clone(),
            })
            .await?;
    }

    let declared_spaces = service.query_exchange_spaces("").await?.len();
    let declared_topics = service.query_topics("").await?.len();
    let declared_queues = service.query_queues("").await?.len();
    info!(
        service = service.name(),
        records = registry.record_count().await,
        spaces = declared_spaces,
        topics = declared_topics,
        queues = declared_queues,
        "topology bootstrap complete"
    );

    Ok(())
}
