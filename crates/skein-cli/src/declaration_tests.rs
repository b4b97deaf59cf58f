use std::collections::HashMap;

use skein_planner::{Language, SymbolKind};

use crate::declaration::{default_declaration, sanitize_identifier, substitute};

fn names<'a>(pairs: &[(&'a str, &str)]) -> HashMap<&'a str, String> {
    pairs
        .iter()
        .map(|&(key, value)| (key, value.to_string()))
        .collect()
}

#[test]
fn substitute_replaces_placeholders() {
    let names = names(&[("self", "Store"), ("Pet", "Pet2")]);

    let out = substitute("class {{self}} { pets: {{ Pet }}[] }", &names).unwrap();

    assert_eq!(out, "class Store { pets: Pet2[] }");
}

#[test]
fn substitute_leaves_plain_braces() {
    let names = names(&[("self", "f")]);

    let out = substitute("function {{self}}() { return {}; }", &names).unwrap();

    assert_eq!(out, "function f() { return {}; }");
}

#[test]
fn substitute_rejects_unknown_placeholder() {
    let err = substitute("{{Missing}}", &names(&[])).unwrap_err();
    assert_eq!(err, "unknown placeholder `Missing`");
}

#[test]
fn substitute_rejects_unterminated_placeholder() {
    let err = substitute("const {{self = 1;", &names(&[("self", "x")])).unwrap_err();
    assert_eq!(err, "unterminated `{{` placeholder");
}

#[test]
fn sanitize_replaces_illegal_characters() {
    assert_eq!(sanitize_identifier("pet-store", Language::TypeScript), "pet_store");
    assert_eq!(sanitize_identifier("$ref", Language::TypeScript), "$ref");
    assert_eq!(sanitize_identifier("$ref", Language::Python), "_ref");
    assert_eq!(sanitize_identifier("2fa", Language::Python), "_2fa");
    assert_eq!(sanitize_identifier("", Language::JavaScript), "_");
}

#[test]
fn sanitize_escapes_reserved_words() {
    assert_eq!(sanitize_identifier("default", Language::TypeScript), "default_");
    assert_eq!(sanitize_identifier("lambda", Language::Python), "lambda_");
    assert_eq!(sanitize_identifier("lambda", Language::TypeScript), "lambda");
    assert_eq!(sanitize_identifier("None", Language::Python), "None_");
}

#[test]
fn default_typescript_declarations() {
    let ts = Language::TypeScript;
    assert_eq!(
        default_declaration(ts, SymbolKind::Interface, "Pet", true),
        "export interface Pet {}"
    );
    assert_eq!(
        default_declaration(ts, SymbolKind::Type, "Id", false),
        "type Id = unknown;"
    );
    assert_eq!(
        default_declaration(ts, SymbolKind::Var, "pets", true),
        "export const pets = undefined;"
    );
}

#[test]
fn default_javascript_declarations_drop_types() {
    let js = Language::JavaScript;
    assert_eq!(
        default_declaration(js, SymbolKind::Interface, "Pet", true),
        "/** @typedef {unknown} Pet */"
    );
    assert_eq!(
        default_declaration(js, SymbolKind::Enum, "Color", true),
        "export const Color = Object.freeze({});"
    );
    assert_eq!(
        default_declaration(js, SymbolKind::Class, "Pet", false),
        "class Pet {}"
    );
}

#[test]
fn default_python_declarations() {
    let py = Language::Python;
    assert_eq!(
        default_declaration(py, SymbolKind::Class, "Pet", true),
        "class Pet:\n    pass"
    );
    assert_eq!(
        default_declaration(py, SymbolKind::Function, "load", true),
        "def load():\n    pass"
    );
    assert_eq!(default_declaration(py, SymbolKind::Var, "pets", true), "pets = None");
}
