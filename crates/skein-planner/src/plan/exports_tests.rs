use crate::files::ExportMember;
use crate::project::Project;
use crate::symbols::{ImportKind, SymbolIn, SymbolKind};
use crate::test_utils::{MockNode, file_named, project};
use crate::SymbolId;

fn reexported(project: &mut Project, name: &str, path: &str, kind: SymbolKind) -> SymbolId {
    let symbol = project
        .symbols_mut()
        .register(
            SymbolIn::new(name)
                .kind(kind)
                .exported(true)
                .file_path(path)
                .export_from(["index"]),
        )
        .unwrap();
    project
        .add_node(Box::new(MockNode::new(name, Some(symbol))))
        .unwrap();
    symbol
}

fn member(exported: &str, source: &str, type_only: bool) -> ExportMember {
    ExportMember {
        exported_name: exported.to_string(),
        source_name: source.to_string(),
        kind: ImportKind::Named,
        type_only,
    }
}

#[test]
fn reexport_synthesizes_group_per_source() {
    let mut project = project();
    reexported(&mut project, "Pet", "models/pet", SymbolKind::Class);
    reexported(&mut project, "Owner", "models/owner", SymbolKind::Class);

    project.plan(None).unwrap();

    let index = file_named(&project, "index");
    let exports = index.exports();
    assert_eq!(exports.len(), 2);
    assert_eq!(exports[0].from, file_named(&project, "pet").id());
    assert_eq!(exports[0].exports, vec![member("Pet", "Pet", false)]);
    assert!(exports[0].can_export_all);
    assert!(!exports[0].type_only);
    assert_eq!(exports[1].exports, vec![member("Owner", "Owner", false)]);
    assert_eq!(index.top_level_names.len(), 2);
}

#[test]
fn type_level_reexport_is_type_only() {
    let mut project = project();
    reexported(&mut project, "Pet", "models/pet", SymbolKind::Interface);

    project.plan(None).unwrap();

    let exports = file_named(&project, "index").exports();
    assert!(exports[0].type_only);
    assert_eq!(exports[0].exports, vec![member("Pet", "Pet", true)]);
}

#[test]
fn renamed_reexport_disables_export_all() {
    let mut project = project();
    reexported(&mut project, "Pet", "models/pet", SymbolKind::Class);
    reexported(&mut project, "Pet", "legacy/pet", SymbolKind::Class);

    project.plan(None).unwrap();

    let exports = file_named(&project, "index").exports();
    assert_eq!(exports.len(), 2);
    assert!(exports[0].can_export_all);
    assert_eq!(exports[1].exports, vec![member("Pet2", "Pet", false)]);
    assert!(!exports[1].can_export_all);
}

#[test]
fn reexport_into_own_file_is_skipped() {
    let mut project = project();
    reexported(&mut project, "Pet", "index", SymbolKind::Class);

    project.plan(None).unwrap();

    assert!(file_named(&project, "index").exports().is_empty());
}

#[test]
fn unexported_node_is_not_reexported() {
    let mut project = project();
    let symbol = project
        .symbols_mut()
        .register(
            SymbolIn::new("Pet")
                .file_path("models/pet")
                .export_from(["index"]),
        )
        .unwrap();
    project
        .add_node(Box::new(MockNode {
            exported: false,
            ..MockNode::new("Pet", Some(symbol))
        }))
        .unwrap();

    project.plan(None).unwrap();

    assert!(file_named(&project, "index").exports().is_empty());
}
