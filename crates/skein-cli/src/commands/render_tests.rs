use std::fs;
use std::path::Path;

use indoc::indoc;

use super::render::{RenderArgs, execute};
use crate::error::Error;

fn write_manifest(dir: &Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("skein.json");
    fs::write(&path, json).unwrap();
    path
}

fn render_to_disk(json: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path(), json);
    execute(&RenderArgs {
        manifest,
        root: None,
        write: true,
    })
    .unwrap_or_else(|e| panic!("{e}"));
    dir
}

fn read(dir: &tempfile::TempDir, path: &str) -> String {
    fs::read_to_string(dir.path().join(path)).unwrap_or_else(|e| panic!("{path}: {e}"))
}

#[test]
fn renders_typescript_project() {
    let dir = render_to_disk(
        r#"{
            "fileCase": "kebab",
            "declarations": [
                {
                    "name": "PetStore",
                    "kind": "class",
                    "file": "PetStore",
                    "uses": ["Pet"],
                    "locals": [{ "name": "pets" }],
                    "body": "export class {{self}} {\n  list(): {{Pet}}[] {\n    const {{pets}}: {{Pet}}[] = [];\n    return {{pets}};\n  }\n}"
                },
                {
                    "name": "Pet",
                    "kind": "interface",
                    "file": "models/Pet",
                    "exportFrom": ["index"],
                    "body": "export interface {{self}} {\n  name: string;\n}"
                }
            ]
        }"#,
    );

    insta::assert_snapshot!(read(&dir, "pet-store.ts"), @r"
    import type { Pet } from './models/pet';

    export class PetStore {
      list(): Pet[] {
        const pets: Pet[] = [];
        return pets;
      }
    }
    ");
    insta::assert_snapshot!(read(&dir, "models/pet.ts"), @r"
    export interface Pet {
      name: string;
    }
    ");
    insta::assert_snapshot!(read(&dir, "index.ts"), @"export type { Pet } from './models/pet';");
}

#[test]
fn renames_import_that_collides_with_declaration() {
    let dir = render_to_disk(
        r#"{ "declarations": [{
            "name": "z",
            "file": "schema",
            "external": [{ "module": "zod", "name": "z" }],
            "body": "export const {{self}} = {{z}}.object({});"
        }] }"#,
    );

    assert_eq!(
        read(&dir, "schema.ts"),
        indoc! {"
            import { z as z2 } from 'zod';

            export const z = z2.object({});
        "}
    );
}

#[test]
fn renders_python_project() {
    let dir = render_to_disk(
        r#"{
            "language": "python",
            "declarations": [
                { "name": "Pet", "kind": "class", "file": "models/pet" },
                {
                    "name": "Store",
                    "kind": "class",
                    "file": "store",
                    "uses": ["Pet"],
                    "body": "class {{self}}:\n    pets: list[{{Pet}}] = []"
                }
            ]
        }"#,
    );

    assert_eq!(
        read(&dir, "store.py"),
        indoc! {"
            from .models.pet import Pet

            class Store:
                pets: list[Pet] = []
        "}
    );
    assert_eq!(read(&dir, "models/pet.py"), "class Pet:\n    pass\n");
}

#[test]
fn prints_files_without_write() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(
        dir.path(),
        r#"{ "declarations": [{ "name": "Pet", "kind": "class", "file": "pet" }] }"#,
    );

    let out = execute(&RenderArgs {
        manifest,
        root: None,
        write: false,
    })
    .unwrap();

    assert!(out.starts_with("==> "));
    assert!(out.ends_with("pet.ts <==\nexport class Pet {}\n"));
    assert!(!dir.path().join("pet.ts").exists());
}

#[test]
fn write_reports_each_path() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("gen");
    let manifest = write_manifest(
        dir.path(),
        r#"{ "root": "gen", "declarations": [
            { "name": "Pet", "file": "a" },
            { "name": "Owner", "file": "b/c" }
        ] }"#,
    );

    let out = execute(&RenderArgs {
        manifest,
        root: None,
        write: true,
    })
    .unwrap();

    assert_eq!(out.lines().count(), 2);
    assert!(out.lines().all(|line| line.starts_with("wrote ")));
    assert!(out_dir.join("a.ts").is_file());
    assert!(out_dir.join("b/c.ts").is_file());
}

#[test]
fn unknown_placeholder_fails_render() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(
        dir.path(),
        r#"{ "declarations": [{ "name": "Pet", "file": "pet", "body": "{{Owner}}" }] }"#,
    );

    let err = execute(&RenderArgs {
        manifest,
        root: None,
        write: false,
    })
    .unwrap_err();

    assert!(matches!(err, Error::Plan(skein_planner::Error::Render { .. })));
    assert!(err.to_string().contains("Pet: unknown placeholder `Owner`"));
}
