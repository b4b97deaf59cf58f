use super::{Node, NodeIn, NodeRegistry};
use crate::Error;
use crate::ids::{FileId, NodeId};
use crate::test_utils::MockNode;

fn mock(name: &str) -> Box<MockNode> {
    Box::new(MockNode::new(name, None))
}

#[test]
fn add_registers_in_order() {
    let mut nodes = NodeRegistry::new();
    let a = nodes.add(mock("a"));
    let b = nodes.add(mock("b"));

    assert_eq!(nodes.registered().collect::<Vec<_>>(), vec![a, b]);
    assert_eq!(nodes.node(b).name(), "b");
    assert!(nodes.referenced().next().is_none());
}

#[test]
fn reference_then_register_fills_slot() {
    let mut nodes = NodeRegistry::new();
    let reserved = nodes.reference(["models", "pet"]).unwrap();
    let again = nodes.reference(["models", "pet"]).unwrap();

    assert_eq!(reserved, again);
    assert!(nodes.get(reserved).is_none());
    assert_eq!(nodes.referenced().collect::<Vec<_>>(), vec![reserved]);

    let id = nodes
        .register(NodeIn::new(mock("Pet")).selector(["models", "pet"]))
        .unwrap();

    assert_eq!(id, reserved);
    assert_eq!(nodes.node(id).name(), "Pet");
    assert!(nodes.referenced().next().is_none());
    assert!(nodes.is_registered(id));
}

#[test]
fn register_unknown_id_fails() {
    let mut nodes = NodeRegistry::new();

    let err = nodes
        .register(NodeIn::new(mock("x")).id(NodeId::from_raw(9999)))
        .unwrap_err();

    assert!(matches!(err, Error::UnknownId { registry: "node", id: 9999 }));
    assert_eq!(err.to_string(), "node registry has no entry with id 9999");
}

#[test]
fn register_by_id_replaces_node() {
    let mut nodes = NodeRegistry::new();
    let id = nodes.add(mock("old"));

    nodes.register(NodeIn::new(mock("new")).id(id)).unwrap();

    assert_eq!(nodes.node(id).name(), "new");
    assert_eq!(nodes.len(), 1);
}

#[test]
fn file_is_write_once() {
    let mut nodes = NodeRegistry::new();
    let id = nodes.add(mock("a"));

    nodes.set_file(id, FileId::from_raw(0)).unwrap();
    nodes.set_file(id, FileId::from_raw(0)).unwrap();
    let err = nodes.set_file(id, FileId::from_raw(1)).unwrap_err();

    assert!(matches!(err, Error::WriteOnce { field: "file", .. }));
    assert_eq!(nodes.file(id), Some(FileId::from_raw(0)));
}

#[test]
fn corrupted_selector_is_consistency_violation() {
    let mut nodes = NodeRegistry::new();
    nodes.store.corrupt_selector(vec!["ghost".to_string()], NodeId::from_raw(42));

    let err = nodes.reference(["ghost"]).unwrap_err();

    assert!(matches!(
        err,
        Error::ConsistencyViolation { registry: "node", id: 42, .. }
    ));
}

#[test]
fn boxed_nodes_clone_through_clone_node() {
    let node: Box<dyn Node> = mock("Pet");
    let copy = node.clone();

    assert_eq!(copy.name(), "Pet");
    assert!(copy.as_any().downcast_ref::<MockNode>().is_some());
}
