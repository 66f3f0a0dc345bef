mod support;

use integration_test_utils::ProvisionCall;
use support::{declare_stack, make_plane};
use topology_model::{
    AddBinding, AssociationIndex, DeclareQueue, ResourceBody, ResourceKind, ResourceStore,
    TopologyError,
};

#[tokio::test]
async fn binding_against_an_undeclared_queue_is_a_bad_request() {
    let plane = make_plane("bindings");
    declare_stack(&plane.service).await;

    let err = plane
        .service
        .add_binding(AddBinding {
            queue_name: "nonexistent-queue".to_string(),
            binding_key: "test.pydap.org:coads.nc".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, TopologyError::BadRequest(_)));

    let bindings = plane
        .registry
        .subjects_of_type(ResourceKind::Binding)
        .await
        .expect("subjects");
    assert!(bindings.is_empty());
    assert!(!plane
        .provisioner
        .calls()
        .iter()
        .any(|call| matches!(call, ProvisionCall::Binding { .. })));
}

#[tokio::test]
async fn binding_walks_the_queue_parents_to_name_the_broker_objects() {
    let plane = make_plane("bindings");
    let (space, point, topic) = declare_stack(&plane.service).await;

    plane
        .service
        .declare_queue(DeclareQueue {
            queue_name: "coads-listener".to_string(),
            exchange_space: space,
            exchange_point: point,
            topic,
        })
        .await
        .expect("declare queue");

    plane
        .service
        .add_binding(AddBinding {
            queue_name: "coads-listener".to_string(),
            binding_key: "test.pydap.org:coads.nc".to_string(),
        })
        .await
        .expect("add binding");

    let binding_calls: Vec<ProvisionCall> = plane
        .provisioner
        .calls()
        .into_iter()
        .filter(|call| matches!(call, ProvisionCall::Binding { .. }))
        .collect();
    assert_eq!(
        binding_calls,
        vec![ProvisionCall::Binding {
            name: "NoName".to_string(),
            space_name: "swapmeet".to_string(),
            point_name: "science_data".to_string(),
            queue_name: "coads-listener".to_string(),
            topic_name: "coads".to_string(),
        }]
    );
}

#[tokio::test]
async fn binding_record_references_the_queue_and_keeps_the_key() {
    let plane = make_plane("bindings");
    let (space, point, topic) = declare_stack(&plane.service).await;

    let queue_refs = plane
        .service
        .declare_queue(DeclareQueue {
            queue_name: "coads-listener".to_string(),
            exchange_space: space,
            exchange_point: point,
            topic,
        })
        .await
        .expect("declare queue");

    plane
        .service
        .add_binding(AddBinding {
            queue_name: "coads-listener".to_string(),
            binding_key: "test.pydap.org:coads.nc".to_string(),
        })
        .await
        .expect("add binding");

    let bindings = plane
        .registry
        .subjects_of_type(ResourceKind::Binding)
        .await
        .expect("subjects");
    assert_eq!(bindings.len(), 1);

    let record = plane.registry.get(&bindings[0]).await.expect("record");
    match record.body() {
        ResourceBody::Binding(body) => {
            assert_eq!(body.queue_name, "coads-listener");
            assert_eq!(body.binding_key, "test.pydap.org:coads.nc");
            assert_eq!(body.queue, queue_refs[0]);
        }
        other => panic!("expected a binding body, got {other:?}"),
    }
    assert!(record.provisioning().is_some());
}
