use adder_lang::ast::{Expr, Stmt};

#[test]
fn decorated_function_with_docstring_and_default_param() {
    let source = "@public\ndef transfer(to: address, amount: uint256 = 0) -> bool:\n    \"\"\"Moves tokens.\"\"\"\n    return True\n";
    let module = adder_lang::parse(source).unwrap();
    assert_eq!(module.functions.len(), 1);
    let def = &module.functions[0];
    assert_eq!(def.name, "transfer");
    assert_eq!(def.decorators.len(), 1);
    assert_eq!(def.decorators[0].name, "public");
    assert_eq!(def.doc.as_deref(), Some("Moves tokens."));
    assert_eq!(def.parameters.len(), 2);
    assert_eq!(def.parameters[1].default, Some(Expr::IntLit(0)));
    assert_eq!(def.body, vec![Stmt::Return(Some(Expr::BoolLit(true)))]);
}

#[test]
fn decorator_with_arguments() {
    let source = "@payable(min_value=1)\ndef deposit():\n    pass\n";
    let module = adder_lang::parse(source).unwrap();
    let decorator = &module.functions[0].decorators[0];
    assert_eq!(decorator.name, "payable");
    let args = decorator.arguments.as_ref().unwrap();
    assert_eq!(args.len(), 1);
    assert_eq!(args[0].name.as_deref(), Some("min_value"));
}

#[test]
fn function_without_decorators_or_return_type() {
    let source = "def tick():\n    pass\n";
    let module = adder_lang::parse(source).unwrap();
    let def = &module.functions[0];
    assert!(def.decorators.is_empty());
    assert!(def.returns.is_none());
    assert!(def.doc.is_none());
}
