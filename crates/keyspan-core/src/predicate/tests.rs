use crate::{
    predicate::{CompareOp, CompiledPredicate, Operand, Predicate, PredicateError},
    test_fixtures::{COL_AGE, COL_FIRST_NAME, COL_LAST_NAME, person_table},
    value::Value,
};

#[test]
fn builder_resolves_fields_by_name() {
    let table = person_table();
    let age = table.field("age").unwrap();

    let predicate = age.gt(18);
    assert_eq!(
        predicate,
        Predicate::Compare {
            column: COL_AGE,
            op: CompareOp::Gt,
            operand: Operand::Literal(Value::Int(18)),
        }
    );
}

#[test]
fn builder_rejects_unknown_field() {
    let table = person_table();

    assert_eq!(
        table.field("nope").unwrap_err(),
        PredicateError::UnknownField {
            field: "nope".to_string()
        }
    );
}

#[test]
fn builder_rejects_relationship_field() {
    let table = person_table();

    assert_eq!(
        table.field("team").unwrap_err(),
        PredicateError::NonScalarField {
            field: "team".to_string()
        }
    );
}

#[test]
fn combinators_require_two_children() {
    let table = person_table();
    let age = table.field("age").unwrap();

    let err = Predicate::all(vec![age.gt(18)]).unwrap_err();
    assert_eq!(
        err,
        PredicateError::CombinatorArity {
            combinator: "and",
            found: 1
        }
    );

    assert!(Predicate::any(Vec::new()).is_err());
    assert!(Predicate::all(vec![age.gt(18), age.lt(65)]).is_ok());
}

#[test]
fn bit_operators_build_binary_combinators() {
    let table = person_table();
    let age = table.field("age").unwrap();

    let both = age.gte(18) & age.lt(65);
    assert!(matches!(&both, Predicate::And(children) if children.len() == 2));

    let either = age.lt(18) | age.gte(65);
    assert!(matches!(&either, Predicate::Or(children) if children.len() == 2));
}

#[test]
fn compile_rejects_out_of_range_column() {
    let table = person_table();
    let rogue = Predicate::NullTest {
        column: 99,
        is_null: true,
    };

    assert_eq!(
        CompiledPredicate::compile(&table, &rogue).unwrap_err(),
        PredicateError::ColumnOutOfRange {
            column: 99,
            column_count: table.column_count(),
        }
    );
}

#[test]
fn compile_rejects_hand_built_single_child_combinator() {
    let table = person_table();
    let age = table.field("age").unwrap();
    let lonely = Predicate::And(vec![age.gt(18)]);

    assert!(matches!(
        CompiledPredicate::compile(&table, &lonely),
        Err(PredicateError::CombinatorArity { found: 1, .. })
    ));
}

#[test]
fn equality_marks_both_masks() {
    let table = person_table();
    let predicate = table.field("last_name").unwrap().eq("Smith");

    let compiled = CompiledPredicate::compile(&table, &predicate).unwrap();
    let masks = compiled.root_masks();

    assert_eq!(masks.used.to_positions(), vec![COL_LAST_NAME]);
    assert_eq!(masks.equal.to_positions(), vec![COL_LAST_NAME]);
}

#[test]
fn range_leaves_mark_used_only() {
    let table = person_table();
    let age = table.field("age").unwrap();

    for predicate in [age.between(18, 65), age.is_null(), age.lt(65)] {
        let compiled = CompiledPredicate::compile(&table, &predicate).unwrap();
        let masks = compiled.root_masks();

        assert_eq!(masks.used.to_positions(), vec![COL_AGE]);
        assert!(masks.equal.is_empty());
    }
}

#[test]
fn and_unions_both_masks() {
    let table = person_table();
    let last = table.field("last_name").unwrap();
    let first = table.field("first_name").unwrap();

    let predicate = last.eq("Smith") & first.between("A", "M");
    let compiled = CompiledPredicate::compile(&table, &predicate).unwrap();
    let masks = compiled.root_masks();

    assert_eq!(
        masks.used.to_positions(),
        vec![COL_LAST_NAME, COL_FIRST_NAME]
    );
    assert_eq!(masks.equal.to_positions(), vec![COL_LAST_NAME]);
}

#[test]
fn or_never_pins_columns() {
    let table = person_table();
    let last = table.field("last_name").unwrap();
    let first = table.field("first_name").unwrap();

    let predicate = last.eq("Smith") | first.eq("Ann");
    let compiled = CompiledPredicate::compile(&table, &predicate).unwrap();
    let masks = compiled.root_masks();

    assert_eq!(
        masks.used.to_positions(),
        vec![COL_LAST_NAME, COL_FIRST_NAME]
    );
    assert!(masks.equal.is_empty());
}

#[test]
fn not_keeps_used_and_clears_equal() {
    let table = person_table();
    let predicate = table.field("last_name").unwrap().eq("Smith").negate();

    let compiled = CompiledPredicate::compile(&table, &predicate).unwrap();
    let masks = compiled.root_masks();

    assert_eq!(masks.used.to_positions(), vec![COL_LAST_NAME]);
    assert!(masks.equal.is_empty());
}

#[test]
fn equality_under_or_does_not_leak_through_and() {
    let table = person_table();
    let last = table.field("last_name").unwrap();
    let first = table.field("first_name").unwrap();
    let age = table.field("age").unwrap();

    // (last = 'Smith' OR first = 'Ann') AND age = 30
    let predicate = (last.eq("Smith") | first.eq("Ann")) & age.eq(30);
    let compiled = CompiledPredicate::compile(&table, &predicate).unwrap();
    let masks = compiled.root_masks();

    assert_eq!(
        masks.used.to_positions(),
        vec![COL_LAST_NAME, COL_FIRST_NAME, COL_AGE]
    );
    assert_eq!(masks.equal.to_positions(), vec![COL_AGE]);
}

#[test]
fn deep_nesting_compiles_without_stack_growth() {
    let table = person_table();
    let age = table.field("age").unwrap();

    let mut predicate = age.gt(0);
    for _ in 0..10_000 {
        predicate = predicate.negate();
    }

    let compiled = CompiledPredicate::compile(&table, &predicate).unwrap();
    assert_eq!(compiled.root_masks().used.to_positions(), vec![COL_AGE]);
}
