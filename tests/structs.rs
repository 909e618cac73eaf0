use adder_lang::ast::Type;

#[test]
fn struct_with_members() {
    let source = "struct Point:\n    x: uint256\n    y: uint256\n";
    let module = adder_lang::parse(source).unwrap();
    assert_eq!(module.structs.len(), 1);
    let def = &module.structs[0];
    assert_eq!(def.name, "Point");
    assert_eq!(def.members.len(), 2);
    assert_eq!(def.members[0].name, "x");
    assert_eq!(def.members[0].ty, Type::Base("uint256".to_string()));
    assert_eq!(def.members[1].name, "y");
}

#[test]
fn empty_struct_uses_pass() {
    let source = "struct Empty:\n    pass\n";
    let module = adder_lang::parse(source).unwrap();
    assert!(module.structs[0].members.is_empty());
}

#[test]
fn array_and_tuple_member_types() {
    let source = "struct Bundle:\n    amounts: uint256[4]\n    pair: (uint256, address)\n";
    let module = adder_lang::parse(source).unwrap();
    let members = &module.structs[0].members;
    assert!(matches!(&members[0].ty, Type::Array { size: adder_lang::ast::ArraySize::Literal(4), .. }));
    assert!(matches!(&members[1].ty, Type::Tuple { elems } if elems.len() == 2));
}
