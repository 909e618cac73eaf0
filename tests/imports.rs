use adder_lang::ast::Import;

#[test]
fn bare_dotted_import() {
    let module = adder_lang::parse("import a.b.c\n").unwrap();
    assert_eq!(
        module.imports,
        vec![Import {
            path: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            alias: None,
        }]
    );
}

#[test]
fn relative_import_with_alias() {
    let module = adder_lang::parse("from .pkg import Foo as Bar\n").unwrap();
    assert_eq!(
        module.imports,
        vec![Import {
            path: vec![".".to_string(), "pkg".to_string(), "Foo".to_string()],
            alias: Some("Bar".to_string()),
        }]
    );
}

#[test]
fn double_dot_path_coalesces_into_one_segment() {
    let module = adder_lang::parse("from ..a import b\n").unwrap();
    assert_eq!(module.imports[0].path, vec!["..".to_string(), "a".to_string(), "b".to_string()]);
}

#[test]
fn grouped_import_yields_multiple_entries() {
    let module = adder_lang::parse("from pkg import (Foo, Bar as Baz)\n").unwrap();
    assert_eq!(module.imports.len(), 2);
    assert_eq!(module.imports[0].path, vec!["pkg".to_string(), "Foo".to_string()]);
    assert_eq!(module.imports[0].alias, None);
    assert_eq!(module.imports[1].path, vec!["pkg".to_string(), "Bar".to_string()]);
    assert_eq!(module.imports[1].alias, Some("Baz".to_string()));
}

#[test]
fn star_import() {
    let module = adder_lang::parse("from pkg import *\n").unwrap();
    assert_eq!(module.imports[0].path, vec!["pkg".to_string(), "*".to_string()]);
}
