use super::*;
use std::path::PathBuf;

#[test]
fn format_dispatch_by_file_name() {
    assert_eq!(FileFormat::from_path(&PathBuf::from("tsconfig.json")), FileFormat::Structured);
    assert_eq!(FileFormat::from_path(&PathBuf::from(".vscode/settings.jsonc")), FileFormat::Structured);
    assert_eq!(FileFormat::from_path(&PathBuf::from(".env")), FileFormat::Env);
    assert_eq!(FileFormat::from_path(&PathBuf::from("app/.env.local")), FileFormat::Text);
    assert_eq!(FileFormat::from_path(&PathBuf::from("prod.env")), FileFormat::Env);
    assert_eq!(FileFormat::from_path(&PathBuf::from("next.config.ts")), FileFormat::Text);
    assert_eq!(FileFormat::from_path(&PathBuf::from("Makefile")), FileFormat::Text);
}

#[test]
fn structured_existence_through_dispatch() {
    let target = PathBuf::from("package.json");
    assert!(already_applied(r#"{"a":{"b":1,"c":2}}"#, r#"{"a":{"b":1}}"#, &target));
    assert!(!already_applied("not json", r#"{"a":1}"#, &target));
}

#[test]
fn structured_apply_ignores_insert_type() {
    let target = PathBuf::from("package.json");
    let out = apply(&target, r#"{"a":1}"#, r#"{"b":2}"#, InsertType::Replace).expect("apply");
    assert!(already_applied(&out, r#"{"a":1,"b":2}"#, &target));
}

#[test]
fn env_apply_ignores_insert_type() {
    let target = PathBuf::from(".env");
    let out = apply(&target, "FOO=1", "FOO=2\nBAR=3", InsertType::Replace).expect("apply");
    assert_eq!(out, "FOO=1\n\nBAR=3");
}

#[test]
fn env_variants_with_other_extensions_are_text() {
    let target = PathBuf::from(".env.local");
    assert!(!already_applied("FOO=1", "FOO=2", &target));
    assert_eq!(
        apply(&target, "FOO=1", "FOO=2", InsertType::Replace).expect("apply"),
        "FOO=2"
    );
}

#[test]
fn env_existence_through_dispatch_ignores_values() {
    assert!(already_applied("FOO=1", "FOO=2", &PathBuf::from(".env")));
}

#[test]
fn text_existence_through_dispatch() {
    assert!(already_applied("a   b\nc", "a b c", &PathBuf::from("README.md")));
}

#[test]
fn text_apply_honours_insert_type() {
    let target = PathBuf::from("globals.css");
    assert_eq!(apply(&target, "a", "b", InsertType::Replace).expect("apply"), "b");
    assert_eq!(apply(&target, "a", "b", InsertType::Append).expect("apply"), "a\n\nb");
}

#[test]
fn apply_reaches_a_fixed_point_for_every_format() {
    let cases = [
        ("tsconfig.json", r#"{"x":{"y":[1]}}"#, r#"{"x":{"y":[2],"z":null}}"#),
        (".env", "A=1", "B=2\n# note\nC=3"),
        ("middleware.ts", "export {}", "export const config = { matcher: [] };"),
    ];

    for (name, existing, fragment) in cases {
        let target = PathBuf::from(name);
        let out = apply(&target, existing, fragment, InsertType::Merge).expect("apply");
        assert!(already_applied(&out, fragment, &target), "{} did not converge", name);
    }
}
