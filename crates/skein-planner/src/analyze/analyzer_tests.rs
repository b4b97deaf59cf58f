use std::any::Any;

use skein_core::Ref;

use super::{AnalysisContext, Analyzer, Relationship};
use crate::ids::{NodeId, SymbolId};
use crate::nodes::{Node, NodeRegistry};
use crate::symbols::{SymbolIn, SymbolRegistry};
use crate::test_utils::MockNode;

/// Pops more scopes than it pushes and counts `analyze` calls.
#[derive(Clone)]
struct Unbalanced {
    calls: Ref<u32>,
}

impl Node for Unbalanced {
    fn analyze(&self, ctx: &mut AnalysisContext<'_>) {
        self.calls.replace(self.calls.get() + 1);
        ctx.pop_scope();
        ctx.pop_scope();
        let inner = ctx.push_scope();
        assert_eq!(ctx.scope(), inner);
        ctx.pop_scope();
        assert_eq!(ctx.scope(), ctx.scopes().root());
    }

    fn name(&self) -> &str {
        "unbalanced"
    }

    fn clone_node(&self) -> Box<dyn Node> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn symbols(n: usize) -> (SymbolRegistry, Vec<SymbolId>) {
    let mut registry = SymbolRegistry::new();
    let ids = (0..n)
        .map(|i| registry.register(SymbolIn::new(format!("s{i}"))).unwrap())
        .collect();
    (registry, ids)
}

#[test]
fn analyze_runs_once_per_node() {
    let (registry, _) = symbols(0);
    let mut nodes = NodeRegistry::new();
    let calls = Ref::new(0);
    let id = nodes.add(Box::new(Unbalanced {
        calls: calls.clone(),
    }));
    let mut analyzer = Analyzer::new();

    analyzer.analyze(id, &nodes, &registry);
    analyzer.analyze(id, &nodes, &registry);

    assert_eq!(calls.get(), 1);
    assert_eq!(analyzer.len(), 1);
    assert_eq!(analyzer.analysis(id).unwrap().scopes().len(), 2);
}

#[test]
fn self_dependency_is_dropped() {
    let (registry, ids) = symbols(2);
    let mut nodes = NodeRegistry::new();
    let node = MockNode::new("a", Some(ids[0]))
        .depends_on(ids[0])
        .depends_on(ids[1]);
    let id = nodes.add(Box::new(node));
    let mut analyzer = Analyzer::new();

    let analysis = analyzer.analyze(id, &nodes, &registry);

    let deps: Vec<SymbolId> = analysis
        .dependencies()
        .iter()
        .map(|(dep, _)| dep.get())
        .collect();
    assert_eq!(deps, vec![ids[1]]);
    assert_eq!(analysis.symbol(), Some(ids[0]));
}

#[test]
fn locals_are_recorded_in_nested_scope() {
    let (registry, ids) = symbols(3);
    let mut nodes = NodeRegistry::new();
    let node = MockNode::new("a", Some(ids[0]))
        .depends_on(ids[1])
        .with_local(ids[2]);
    let id = nodes.add(Box::new(node));
    let mut analyzer = Analyzer::new();

    let analysis = analyzer.analyze(id, &nodes, &registry);

    let scopes = analysis.scopes();
    let deps = analysis.dependencies();
    assert_eq!(deps[0].1, scopes.root());
    assert_eq!(scopes.get(deps[1].1).parent(), Some(scopes.root()));
    assert_eq!(deps[1].0.get(), ids[2]);
}

#[test]
fn structural_edges_in_both_directions() {
    let (registry, _) = symbols(0);
    let mut nodes = NodeRegistry::new();
    let child_a = nodes.add(Box::new(MockNode::new("child_a", None)));
    let child_b = nodes.add(Box::new(MockNode::new("child_b", None)));
    let parent = nodes.add(Box::new(MockNode {
        children: vec![child_a, child_b],
        ..MockNode::new("parent", None)
    }));
    let mut analyzer = Analyzer::new();

    analyzer.analyze(parent, &nodes, &registry);

    assert_eq!(
        analyzer.children(parent),
        &[
            (child_a, Relationship::Container),
            (child_b, Relationship::Container)
        ]
    );
    assert_eq!(analyzer.parent(child_b), Some(parent));
    assert_eq!(analyzer.parent(parent), None);
    assert!(analyzer.children(NodeId::from_raw(99)).is_empty());
}
