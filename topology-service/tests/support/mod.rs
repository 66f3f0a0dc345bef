use integration_test_utils::RecordingProvisioner;
use memory_registry::InMemoryRegistry;
use std::sync::Arc;
use topology_model::{DeclareExchangePoint, DeclareExchangeSpace, DeclareTopic, ResourceIdentity};
use topology_service::TopologyService;

pub(crate) struct TestPlane {
    pub(crate) service: Arc<TopologyService>,
    pub(crate) registry: Arc<InMemoryRegistry>,
    pub(crate) provisioner: Arc<RecordingProvisioner>,
}

pub(crate) fn make_plane(name: &str) -> TestPlane {
    let registry = Arc::new(InMemoryRegistry::new());
    let provisioner = Arc::new(RecordingProvisioner::new());
    let service = Arc::new(TopologyService::new(
        name,
        registry.clone(),
        registry.clone(),
        provisioner.clone(),
    ));

    TestPlane {
        service,
        registry,
        provisioner,
    }
}

#[allow(dead_code)]
pub(crate) async fn declare_space(service: &TopologyService, name: &str) -> ResourceIdentity {
    let refs = service
        .declare_exchange_space(DeclareExchangeSpace {
            exchange_space_name: name.to_string(),
        })
        .await
        .expect("declare exchange space");
    refs.into_iter().next().expect("one reference")
}

#[allow(dead_code)]
pub(crate) async fn declare_point(
    service: &TopologyService,
    name: &str,
    space: &ResourceIdentity,
) -> ResourceIdentity {
    let refs = service
        .declare_exchange_point(DeclareExchangePoint {
            exchange_point_name: name.to_string(),
            exchange_space: space.clone(),
        })
        .await
        .expect("declare exchange point");
    refs.into_iter().next().expect("one reference")
}

#[allow(dead_code)]
pub(crate) async fn declare_topic(
    service: &TopologyService,
    name: &str,
    space: &ResourceIdentity,
    point: &ResourceIdentity,
) -> ResourceIdentity {
    let refs = service
        .declare_topic(DeclareTopic {
            topic_name: name.to_string(),
            exchange_space: space.clone(),
            exchange_point: point.clone(),
        })
        .await
        .expect("declare topic");
    refs.into_iter().next().expect("one reference")
}

/// Declares the usual swapmeet/science_data/coads stack and returns the
/// three references.
#[allow(dead_code)]
pub(crate) async fn declare_stack(
    service: &TopologyService,
) -> (ResourceIdentity, ResourceIdentity, ResourceIdentity) {
    let space = declare_space(service, "swapmeet").await;
    let point = declare_point(service, "science_data", &space).await;
    let topic = declare_topic(service, "coads", &space, &point).await;
    (space, point, topic)
}
