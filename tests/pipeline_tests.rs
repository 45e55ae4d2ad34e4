//! List and inspect pipeline integration tests
//!
//! Exercises the per-family pipelines end to end on engine-shaped JSON:
//! decorate-all versus filter mode, order preservation, label fallback for
//! stack-deployed resources, and batch failure on malformed elements.

use harbormaster::access_control::{
    InspectOutcome, OperationContext, ResourceFamily, inspect_operation, list_operation,
};
use harbormaster::error::ProxyError;
use harbormaster::model::{ResourceControl, ResourceControlId, ResourceControlType, TeamId, UserId};
use serde_json::{Value, json};

fn service(id: &str, stack: Option<&str>) -> Value {
    match stack {
        Some(stack) => json!({
            "ID": id,
            "Spec": {"Name": id, "Labels": {"com.docker.stack.namespace": stack}}
        }),
        None => json!({"ID": id, "Spec": {"Name": id, "Labels": {}}}),
    }
}

fn task(id: &str, service_id: &str) -> Value {
    json!({
        "ID": id,
        "ServiceID": service_id,
        "Spec": {"ContainerSpec": {"Labels": {}}}
    })
}

fn control(id: u64, control_type: ResourceControlType, resource_id: &str) -> ResourceControl {
    ResourceControl::new(ResourceControlId(id), control_type, resource_id)
}

fn ids(resources: &[Value]) -> Vec<&str> {
    resources
        .iter()
        .filter_map(|r| r["ID"].as_str())
        .collect()
}

// =============================================================================
// Tasks inherit the control of their service
// =============================================================================

#[test]
fn test_tasks_of_owned_service_are_kept_and_decorated() {
    let controls = vec![
        control(1, ResourceControlType::Service, "svc-1").with_owner_user(UserId(42)),
    ];
    let context = OperationContext::restricted(UserId(42), vec![], controls);

    let tasks = vec![task("t1", "svc-1"), task("t2", "svc-1")];
    let kept = list_operation(tasks, ResourceFamily::Task.policy(), &context).unwrap();

    assert_eq!(ids(&kept), vec!["t1", "t2"]);
    for task in &kept {
        let control = &task["Harbormaster"]["ResourceControls"]["service"];
        assert_eq!(control["ResourceId"], "svc-1");
        assert_eq!(control["OwnerUserIds"], json!([42]));
    }
}

#[test]
fn test_tasks_of_foreign_service_are_dropped() {
    let controls = vec![
        control(1, ResourceControlType::Service, "svc-1").with_owner_user(UserId(42)),
    ];
    let context = OperationContext::restricted(UserId(7), vec![], controls);

    let tasks = vec![task("t1", "svc-1"), task("t2", "svc-2")];
    let kept = list_operation(tasks, ResourceFamily::Task.policy(), &context).unwrap();

    assert_eq!(ids(&kept), vec!["t2"]);
}

// =============================================================================
// Stack label fallback
// =============================================================================

#[test]
fn test_uncontrolled_service_in_public_stack_is_kept_undecorated() {
    let controls = vec![control(1, ResourceControlType::Stack, "alpha").public()];
    let context = OperationContext::restricted(UserId(7), vec![], controls);

    let kept = list_operation(
        vec![service("svc-1", Some("alpha"))],
        ResourceFamily::Service.policy(),
        &context,
    )
    .unwrap();

    // No service control: public, the label is never looked at
    assert_eq!(ids(&kept), vec!["svc-1"]);
    assert!(kept[0].get("Harbormaster").is_none());
}

#[test]
fn test_service_control_denial_rescued_by_public_stack() {
    let controls = vec![
        control(1, ResourceControlType::Service, "svc-1").with_owner_user(UserId(42)),
        control(2, ResourceControlType::Stack, "alpha").public(),
    ];
    let context = OperationContext::restricted(UserId(7), vec![], controls);

    let kept = list_operation(
        vec![service("svc-1", Some("alpha"))],
        ResourceFamily::Service.policy(),
        &context,
    )
    .unwrap();

    assert_eq!(ids(&kept), vec!["svc-1"]);
    let decoration = &kept[0]["Harbormaster"]["ResourceControls"];
    assert_eq!(decoration["stack"]["ResourceId"], "alpha");
    assert!(decoration.get("service").is_none());
}

#[test]
fn test_owned_service_in_uncontrolled_stack_is_public() {
    let controls = vec![
        control(1, ResourceControlType::Service, "svc-1").with_owner_user(UserId(42)),
    ];
    let stranger = OperationContext::restricted(UserId(8), vec![], controls);

    let kept = list_operation(
        vec![service("svc-1", Some("beta")), service("svc-2", None)],
        ResourceFamily::Service.policy(),
        &stranger,
    )
    .unwrap();

    // The stack label names no control, so the label path grants
    assert_eq!(ids(&kept), vec!["svc-1"]);
    assert!(kept[0].get("Harbormaster").is_none());
}

#[test]
fn test_service_control_denial_rescued_by_team_stack() {
    let controls = vec![
        control(1, ResourceControlType::Service, "svc-1").with_owner_user(UserId(1)),
        control(2, ResourceControlType::Stack, "alpha").with_owner_team(TeamId(3)),
    ];
    let member = OperationContext::restricted(UserId(7), vec![TeamId(3)], controls.clone());
    let stranger = OperationContext::restricted(UserId(8), vec![], controls);

    let services = vec![service("svc-1", Some("alpha"))];
    let policy = ResourceFamily::Service.policy();

    assert_eq!(list_operation(services.clone(), policy, &member).unwrap().len(), 1);
    assert!(list_operation(services, policy, &stranger).unwrap().is_empty());
}

#[test]
fn test_network_labels_are_top_level() {
    let controls = vec![
        control(1, ResourceControlType::Network, "net-1").with_owner_user(UserId(1)),
        control(2, ResourceControlType::Stack, "alpha").with_owner_user(UserId(7)),
    ];
    let context = OperationContext::restricted(UserId(7), vec![], controls);
    let network = json!({
        "Id": "net-1",
        "Name": "alpha_default",
        "Labels": {"com.docker.stack.namespace": "alpha"}
    });

    let kept = list_operation(vec![network], ResourceFamily::Network.policy(), &context).unwrap();
    assert_eq!(kept.len(), 1);
}

// =============================================================================
// Decorate-all versus filter
// =============================================================================

#[test]
fn test_admin_never_drops() {
    let controls = vec![
        control(1, ResourceControlType::Service, "svc-1").with_owner_user(UserId(42)),
        control(2, ResourceControlType::Stack, "beta"),
    ];
    let context = OperationContext::administrator(UserId(1), controls);
    let services = vec![
        service("svc-1", None),
        service("svc-2", Some("beta")),
        service("svc-3", None),
    ];

    let result = list_operation(services, ResourceFamily::Service.policy(), &context).unwrap();

    assert_eq!(ids(&result), vec!["svc-1", "svc-2", "svc-3"]);
    assert!(result[0]["Harbormaster"]["ResourceControls"]["service"].is_object());
    assert!(result[1]["Harbormaster"]["ResourceControls"]["stack"].is_object());
    assert!(result[2].get("Harbormaster").is_none());
}

#[test]
fn test_endpoint_access_decorates_tasks() {
    let controls = vec![control(1, ResourceControlType::Service, "svc-1")];
    let context = OperationContext::restricted(UserId(9), vec![], controls)
        .with_endpoint_resource_access(true);

    let result = list_operation(
        vec![task("t1", "svc-1")],
        ResourceFamily::Task.policy(),
        &context,
    )
    .unwrap();

    assert!(result[0]["Harbormaster"]["ResourceControls"]["service"].is_object());
}

#[test]
fn test_filter_preserves_order() {
    let controls = vec![
        control(1, ResourceControlType::Secret, "s2").with_owner_user(UserId(1)),
        control(2, ResourceControlType::Secret, "s4").with_owner_user(UserId(1)),
    ];
    let context = OperationContext::restricted(UserId(7), vec![], controls);
    let secrets: Vec<Value> = (1..=5)
        .map(|i| json!({"ID": format!("s{}", i), "Spec": {"Labels": {}}}))
        .collect();

    let kept = list_operation(secrets, ResourceFamily::Secret.policy(), &context).unwrap();
    assert_eq!(ids(&kept), vec!["s1", "s3", "s5"]);
}

// =============================================================================
// Structural errors
// =============================================================================

#[test]
fn test_one_missing_identifier_fails_the_batch() {
    let context = OperationContext::restricted(UserId(7), vec![], vec![]);
    let services = vec![
        service("svc-1", None),
        json!({"Spec": {"Name": "anonymous"}}),
        service("svc-3", None),
    ];

    let err = list_operation(services, ResourceFamily::Service.policy(), &context).unwrap_err();
    assert!(matches!(err, ProxyError::IdentifierNotFound(ResourceFamily::Service)));
    assert_eq!(err.to_string(), "Docker service identifier not found");
}

#[test]
fn test_task_without_service_id() {
    let context = OperationContext::administrator(UserId(1), vec![]);
    let err = list_operation(
        vec![json!({"ID": "t1"})],
        ResourceFamily::Task.policy(),
        &context,
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Docker task service identifier not found");
}

// =============================================================================
// Inspect
// =============================================================================

#[test]
fn test_inspect_granted_is_decorated() {
    let controls =
        vec![control(1, ResourceControlType::Config, "cfg-1").with_owner_user(UserId(7))];
    let context = OperationContext::restricted(UserId(7), vec![], controls);
    let config = json!({"ID": "cfg-1", "Spec": {"Labels": {}}});

    let outcome = inspect_operation(
        config.as_object().cloned().unwrap(),
        ResourceFamily::Config.policy(),
        &context,
    )
    .unwrap();

    match outcome {
        InspectOutcome::Granted(document) => {
            assert!(document["Harbormaster"]["ResourceControls"]["config"].is_object());
        }
        InspectOutcome::Denied => panic!("owner must see the config"),
    }
}

#[test]
fn test_inspect_denied_carries_nothing() {
    let controls =
        vec![control(1, ResourceControlType::Config, "cfg-1").with_owner_user(UserId(1))];
    let context = OperationContext::restricted(UserId(7), vec![], controls);
    let config = json!({"ID": "cfg-1", "Spec": {"Labels": {}}});

    let outcome = inspect_operation(
        config.as_object().cloned().unwrap(),
        ResourceFamily::Config.policy(),
        &context,
    )
    .unwrap();

    assert_eq!(outcome, InspectOutcome::Denied);
}

#[test]
fn test_inspect_missing_identifier() {
    let context = OperationContext::restricted(UserId(7), vec![], vec![]);
    let network = json!({"Name": "bridge"});

    let err = inspect_operation(
        network.as_object().cloned().unwrap(),
        ResourceFamily::Network.policy(),
        &context,
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Docker network identifier not found");
}
