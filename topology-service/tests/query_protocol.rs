mod support;

use integration_test_utils::RecordingProvisioner;
use memory_registry::InMemoryRegistry;
use std::sync::Arc;
use support::{declare_stack, make_plane};
use topology_model::{DeclareTopic, TopologyError};
use topology_service::{QueryFilterField, TopologyService};

#[tokio::test]
async fn empty_pattern_returns_every_topic() {
    let plane = make_plane("queries");
    let (space, point, _topic) = declare_stack(&plane.service).await;

    for name in ["glider_data", "mooring_data"] {
        plane
            .service
            .declare_topic(DeclareTopic {
                topic_name: name.to_string(),
                exchange_space: space.clone(),
                exchange_point: point.clone(),
            })
            .await
            .expect("declare topic");
    }

    let all = plane
        .service
        .query_topics("")
        .await
        .expect("query should succeed");
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn unmatched_pattern_returns_an_empty_list() {
    let plane = make_plane("queries");
    declare_stack(&plane.service).await;

    let matches = plane
        .service
        .query_topics("zzz-no-match")
        .await
        .expect("query should succeed");
    assert!(matches.is_empty());
}

#[tokio::test]
async fn identity_filter_searches_the_identity_string() {
    let plane = make_plane("queries");
    declare_stack(&plane.service).await;

    // Identities minted by the registry carry the kind as a prefix, so a
    // search anywhere in the identity string finds all topics and nothing
    // else.
    let topics = plane
        .service
        .query_topics("^topic-")
        .await
        .expect("query should succeed");
    assert_eq!(topics.len(), 1);

    let spaces = plane
        .service
        .query_exchange_spaces("^topic-")
        .await
        .expect("query should succeed");
    assert!(spaces.is_empty());
}

#[tokio::test]
async fn name_filter_matches_the_human_readable_topic_name() {
    let registry = Arc::new(InMemoryRegistry::new());
    let provisioner = Arc::new(RecordingProvisioner::new());
    let service = Arc::new(
        TopologyService::new("queries", registry.clone(), registry.clone(), provisioner)
            .with_query_filter(QueryFilterField::Name),
    );

    let (space, point, _topic) = declare_stack(&service).await;
    for name in ["glider_data", "instrument_commands"] {
        service
            .declare_topic(DeclareTopic {
                topic_name: name.to_string(),
                exchange_space: space.clone(),
                exchange_point: point.clone(),
            })
            .await
            .expect("declare topic");
    }

    let matches = service
        .query_topics(".*data.*")
        .await
        .expect("query should succeed");
    assert_eq!(matches.len(), 1);

    let everything = service.query_topics("").await.expect("query should succeed");
    assert_eq!(everything.len(), 3);
}

#[tokio::test]
async fn invalid_pattern_is_rejected_as_a_bad_request() {
    let plane = make_plane("queries");

    let err = plane.service.query_topics("(unclosed").await.unwrap_err();
    assert!(matches!(err, TopologyError::BadRequest(_)));
}
