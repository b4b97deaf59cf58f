use crate::files::File;
use crate::language::Language;
use crate::project::{Project, ProjectConfig};
use crate::symbols::SymbolKind;
use crate::test_utils::{MockNode, declare, declare_with, file_named, local, project};
use crate::{Error, SymbolId};

fn final_name(project: &Project, symbol: SymbolId) -> &str {
    project.symbols().final_name(symbol).unwrap()
}

fn kinds(file: &File, name: &str) -> Vec<SymbolKind> {
    file.top_level_names
        .get(name)
        .map(|kinds| kinds.iter().copied().collect())
        .unwrap_or_default()
}

#[test]
fn conflicting_declarations_get_numeric_suffixes() {
    let mut project = project();
    let a = declare(&mut project, "Foo", "models", SymbolKind::Class);
    let b = declare(&mut project, "Foo", "models", SymbolKind::Class);
    let c = declare(&mut project, "Foo", "models", SymbolKind::Function);

    project.plan(None).unwrap();

    assert_eq!(final_name(&project, a), "Foo");
    assert_eq!(final_name(&project, b), "Foo2");
    assert_eq!(final_name(&project, c), "Foo3");
}

#[test]
fn same_name_in_different_files_does_not_conflict() {
    let mut project = project();
    let a = declare(&mut project, "Foo", "a", SymbolKind::Class);
    let b = declare(&mut project, "Foo", "b", SymbolKind::Class);

    project.plan(None).unwrap();

    assert_eq!(final_name(&project, a), "Foo");
    assert_eq!(final_name(&project, b), "Foo");
}

#[test]
fn mergeable_kinds_share_a_name() {
    let mut project = project();
    let class = declare(&mut project, "Pet", "models", SymbolKind::Class);
    let interface = declare(&mut project, "Pet", "models", SymbolKind::Interface);
    let alias = declare(&mut project, "id", "models", SymbolKind::Var);
    let ty = declare(&mut project, "id", "models", SymbolKind::Type);

    project.plan(None).unwrap();

    assert_eq!(final_name(&project, class), "Pet");
    assert_eq!(final_name(&project, interface), "Pet");
    assert_eq!(final_name(&project, alias), "id");
    assert_eq!(final_name(&project, ty), "id");

    let file = file_named(&project, "models");
    assert_eq!(
        kinds(file, "Pet"),
        vec![SymbolKind::Class, SymbolKind::Interface]
    );
    assert_eq!(file.resolved_names.get(&interface).map(String::as_str), Some("Pet"));
    assert_eq!(file.resolved_names.get_keys(&"Pet".to_string()).map(|k| k.len()), Some(2));
}

#[test]
fn python_uses_underscore_suffix() {
    let mut project = project();
    let python = |node: MockNode| node.language(Some(Language::Python));
    let a = declare_with(&mut project, "pet", "models", SymbolKind::Function, python);
    let b = declare_with(&mut project, "pet", "models", SymbolKind::Function, python);

    project.plan(None).unwrap();

    assert_eq!(final_name(&project, a), "pet");
    assert_eq!(final_name(&project, b), "pet_2");
}

#[test]
fn custom_resolver_per_language() {
    let config = ProjectConfig::new("/root").name_conflict_resolver(Language::TypeScript, |c| {
        Some(format!("{}_v{}", c.base_name, c.attempt))
    });
    let mut project = Project::new(config);
    declare(&mut project, "Foo", "models", SymbolKind::Class);
    let b = declare(&mut project, "Foo", "models", SymbolKind::Class);

    project.plan(None).unwrap();

    assert_eq!(final_name(&project, b), "Foo_v1");
}

#[test]
fn resolver_giving_up_is_fatal() {
    let config = ProjectConfig::new("/root").default_name_conflict_resolver(|_| None);
    let mut project = Project::new(config);
    declare(&mut project, "Foo", "models", SymbolKind::Class);
    declare(&mut project, "Foo", "models", SymbolKind::Class);

    let err = project.plan(None).unwrap_err();

    assert!(matches!(
        &err,
        Error::UnresolvableNameConflict { symbol } if symbol == "Foo#1"
    ));
    assert_eq!(err.to_string(), "unresolvable name conflict: Foo#1");
}

#[test]
fn resolver_that_never_converges_hits_attempt_cap() {
    let config = ProjectConfig::new("/root")
        .default_name_conflict_resolver(|c| Some(c.base_name.to_string()))
        .max_name_attempts(5);
    let mut project = Project::new(config);
    declare(&mut project, "Foo", "models", SymbolKind::Class);
    declare(&mut project, "Foo", "models", SymbolKind::Class);

    let err = project.plan(None).unwrap_err();

    assert!(matches!(err, Error::UnresolvableNameConflict { .. }));
}

#[test]
fn sanitizer_applies_to_base_and_candidates() {
    let mut project = project();
    let sanitize = |node: MockNode| MockNode {
        sanitize: Some(|name: &str| name.replace('-', "_")),
        ..node
    };
    let a = declare_with(&mut project, "my-pet", "models", SymbolKind::Class, sanitize);
    let b = declare_with(&mut project, "my-pet", "models", SymbolKind::Class, sanitize);

    project.plan(None).unwrap();

    assert_eq!(final_name(&project, a), "my_pet");
    assert_eq!(final_name(&project, b), "my_pet2");
}

#[test]
fn locals_are_named_per_scope() {
    let mut project = project();
    let pet_id = local(&mut project, "id");
    let owner_id = local(&mut project, "id");
    let shadow = local(&mut project, "Pet");
    let pet = declare_with(&mut project, "Pet", "models", SymbolKind::Class, |node| {
        node.with_local(pet_id).with_local(shadow)
    });
    declare_with(&mut project, "Owner", "models", SymbolKind::Class, |node| {
        node.with_local(owner_id)
    });

    project.plan(None).unwrap();

    assert_eq!(final_name(&project, pet), "Pet");
    assert_eq!(final_name(&project, pet_id), "id");
    assert_eq!(final_name(&project, owner_id), "id");
    assert_eq!(final_name(&project, shadow), "Pet2");

    let file = file_named(&project, "models");
    assert!(file.all_names.contains_key("id"));
    assert!(!file.top_level_names.contains_key("id"));
}

#[test]
fn local_shared_by_two_nodes_is_named_once() {
    let mut project = project();
    let shared = local(&mut project, "value");
    declare_with(&mut project, "A", "models", SymbolKind::Function, |node| {
        node.with_local(shared)
    });
    declare_with(&mut project, "B", "models", SymbolKind::Function, |node| {
        node.with_local(shared)
    });

    project.plan(None).unwrap();

    assert_eq!(final_name(&project, shared), "value");
}

#[test]
fn node_root_scope_records_its_own_name() {
    let mut project = project();
    declare(&mut project, "Pet", "models", SymbolKind::Class);

    project.plan(None).unwrap();

    let node = project.nodes().registered().next().unwrap();
    let analysis = project.analyzer().unwrap().analysis(node).unwrap();
    let scopes = analysis.scopes();
    assert!(scopes.get(scopes.root()).names.contains_key("Pet"));
}
