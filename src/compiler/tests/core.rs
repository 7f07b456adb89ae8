//! Parameters, operators, functions, CASE, raw fragments, set operations.

use pretty_assertions::assert_eq;

use super::{error, sql};
use crate::ast::builders::*;
use crate::ast::{Alias, Fragment};
use crate::engine::{Engine, compile_fn};
use crate::value::Value;

#[test]
fn test_eq_parameter() {
    let person = alias("person");
    let compiled = Engine::generic()
        .compile(eq(person.col("Id"), 1))
        .unwrap();
    assert_eq!(compiled.sql, "\"person\".\"Id\" = @p0");
    assert_eq!(compiled.parameters.len(), 1);
    assert_eq!(compiled.parameters["@p0"], Value::Int(1));
}

#[test]
fn test_parameters_never_deduplicated() {
    let cond = and().add(eq(col("a"), 1)).add(eq(col("b"), 1));
    let compiled = Engine::generic().compile(cond).unwrap();
    assert_eq!(compiled.sql, "\"a\" = @p0 AND \"b\" = @p1");
    let names: Vec<_> = compiled.parameters.names().collect();
    assert_eq!(names, vec!["@p0", "@p1"]);
    assert_eq!(compiled.parameters["@p1"], Value::Int(1));
}

#[test]
fn test_select_query() {
    let p = Alias::for_table("person", "p");
    let statement = query(
        select()
            .add(p.col("Id"))
            .add_as(p.col("Name"), "n")
            .unwrap(),
    )
    .from(&p)
    .filter(gt(p.col("Age"), 18))
    .order_by(desc(p.col("Name")));
    assert_eq!(
        sql(&Engine::generic(), statement),
        "SELECT \"p\".\"Id\", \"p\".\"Name\" AS \"n\" FROM \"person\" AS \"p\" \
         WHERE \"p\".\"Age\" > @p0 ORDER BY \"p\".\"Name\" DESC"
    );
}

#[test]
fn test_select_all_columns() {
    let p = Alias::for_table("person", "p");
    let statement = query(select().add(p.all())).from(&p);
    assert_eq!(
        sql(&Engine::generic(), statement),
        "SELECT \"p\".* FROM \"person\" AS \"p\""
    );
    assert_eq!(sql(&Engine::generic(), select().add(star())), "SELECT *");
}

#[test]
fn test_empty_lists_fail() {
    let engine = Engine::generic();
    assert_eq!(error(&engine, select()), "List is empty.");
    assert_eq!(error(&engine, and()), "List is empty.");
    assert_eq!(
        error(&engine, not_in(col("a"), Vec::<Fragment>::new())),
        "List is empty."
    );
}

#[test]
fn test_empty_case_fails() {
    assert_eq!(
        error(&Engine::generic(), case()),
        "Add at least one \"when\" clause."
    );
}

#[test]
fn test_case_branch_order() {
    let engine = Engine::generic();
    let searched = case()
        .when(eq(col("a"), 1), "one")
        .when(eq(col("a"), 2), "two");
    assert_eq!(
        sql(&engine, searched.clone()),
        "CASE WHEN \"a\" = @p0 THEN @p1 WHEN \"a\" = @p2 THEN @p3 END"
    );
    assert_eq!(
        sql(&engine, searched.otherwise("other")),
        "CASE WHEN \"a\" = @p0 THEN @p1 WHEN \"a\" = @p2 THEN @p3 ELSE @p4 END"
    );
    assert_eq!(
        sql(&engine, case_of(col("a")).when(1, "x")),
        "CASE \"a\" WHEN @p0 THEN @p1 END"
    );
}

#[test]
fn test_nested_case_parenthesized() {
    let nested = case().when(eq(col("a"), 1), case().when(eq(col("b"), 2), "x"));
    assert_eq!(
        sql(&Engine::generic(), nested),
        "CASE WHEN \"a\" = @p0 THEN (CASE WHEN \"b\" = @p1 THEN @p2 END) END"
    );
}

#[test]
fn test_operator_precedence() {
    let engine = Engine::generic();
    assert_eq!(
        sql(&engine, times().add(plus().add(col("a")).add(col("b"))).add(col("c"))),
        "(\"a\" + \"b\") * \"c\""
    );
    assert_eq!(
        sql(&engine, plus().add(col("a")).add(times().add(col("b")).add(col("c")))),
        "\"a\" + \"b\" * \"c\""
    );
    assert_eq!(
        sql(&engine, minus().add(col("a")).add(minus().add(col("b")).add(col("c")))),
        "\"a\" - (\"b\" - \"c\")"
    );
    assert_eq!(
        sql(&engine, plus().add(plus().add(col("a")).add(col("b"))).add(col("c"))),
        "\"a\" + \"b\" + \"c\""
    );
    assert_eq!(
        sql(&engine, and().add(or().add(col("a")).add(col("b"))).add(col("c"))),
        "(\"a\" OR \"b\") AND \"c\""
    );
}

#[test]
fn test_prefix_operators() {
    let engine = Engine::generic();
    assert_eq!(sql(&engine, not(eq(col("a"), 1))), "NOT (\"a\" = @p0)");
    assert_eq!(sql(&engine, negate(col("a"))), "- \"a\"");
    assert_eq!(
        sql(&engine, bit_not(plus().add(col("a")).add(1))),
        "~ (\"a\" + @p0)"
    );
}

#[test]
fn test_exists() {
    let statement = query(select().add(1)).from(&alias("t"));
    assert_eq!(
        sql(&Engine::generic(), exists(statement.clone())),
        "EXISTS (SELECT @p0 FROM \"t\")"
    );
    assert_eq!(
        sql(&Engine::generic(), not_exists(statement)),
        "NOT EXISTS (SELECT @p0 FROM \"t\")"
    );
}

#[test]
fn test_between_in_and_null_checks() {
    let engine = Engine::generic();
    assert_eq!(
        sql(&engine, between(col("a"), 1, 10)),
        "\"a\" BETWEEN @p0 AND @p1"
    );
    assert_eq!(
        sql(&engine, is_in(col("a"), [1, 2, 3])),
        "\"a\" IN (@p0, @p1, @p2)"
    );
    assert_eq!(
        sql(
            &engine,
            in_query(col("a"), query(select().add(col("id"))).from(&alias("t")))
        ),
        "\"a\" IN (SELECT \"id\" FROM \"t\")"
    );
    assert_eq!(sql(&engine, is_null(col("a"))), "\"a\" IS NULL");
    assert_eq!(sql(&engine, is_not_null(col("a"))), "\"a\" IS NOT NULL");
}

#[test]
fn test_wrong_operand_count() {
    let broken = between(col("a"), 1, 2).add(3);
    assert_eq!(
        error(&Engine::generic(), broken),
        "Operator Between expects 3 operand(s), got 4."
    );
}

#[test]
fn test_function_calls() {
    let engine = Engine::generic();
    assert_eq!(sql(&engine, count(star())), "COUNT(*)");
    assert_eq!(sql(&engine, count_distinct(col("a"))), "COUNT(DISTINCT \"a\")");
    assert_eq!(sql(&engine, func("MY_FN").arg(1)), "MY_FN(@p0)");
    assert_eq!(sql(&engine, row_number()), "ROW_NUMBER()");
    assert_eq!(
        sql(&engine, coalesce([Fragment::from(col("a")), Fragment::from(0)])),
        "COALESCE(\"a\", @p0)"
    );
}

#[test]
fn test_functions_only_registered() {
    let mut engine = Engine::generic();
    engine.options.functions_only_registered = true;
    assert_eq!(
        error(&engine, func("MY_FN")),
        "Function \"MY_FN\" is not supported in this engine."
    );
    engine.add_function("my_fn");
    assert_eq!(sql(&engine, func("MY_FN")), "my_fn()");
}

#[test]
fn test_custom_function() {
    let mut engine = Engine::generic();
    engine.add_function_custom(
        "IIF",
        compile_fn(|b, args| {
            b.push("IIF(");
            b.compile_list(args, "; ")?;
            b.push(")");
            Ok(())
        }),
    );
    assert_eq!(sql(&engine, func("iif").arg(1).arg(2)), "IIF(@p0; @p1)");
}

#[test]
fn test_distinct_on_custom_function_fails() {
    let mut engine = Engine::generic();
    engine.add_function_custom("COUNT", compile_fn(|b, args| b.compile_call("CNT", args, false)));
    assert_eq!(
        error(&engine, count_distinct(col("a"))),
        "Function \"COUNT\" does not accept DISTINCT in this engine."
    );
    assert_eq!(sql(&engine, count(col("a"))), "CNT(\"a\")");

    assert_eq!(
        error(&Engine::oracle(), trim(col("a")).distinct()),
        "Function \"TRIM\" does not accept DISTINCT in this engine."
    );
    assert_eq!(
        sql(&Engine::generic(), count_distinct(col("a"))),
        "COUNT(DISTINCT \"a\")"
    );
}

#[test]
fn test_raw_splices() {
    let engine = Engine::generic();
    let splice = raw("DATEADD(day, {1}, {0})").fragment(col("created")).value(7);
    let compiled = engine.compile(splice).unwrap();
    assert_eq!(compiled.sql, "DATEADD(day, @p0, \"created\")");
    assert_eq!(compiled.parameters["@p0"], Value::Int(7));

    assert_eq!(sql(&engine, raw("{{x}} = {0}").value(1)), "{x} = @p0");
    assert_eq!(
        error(&engine, raw("{1}").value(1)),
        "Invalid raw format: argument 1 is out of range (1 given)"
    );
}

fn table_query(n: u32) -> Fragment {
    query(select().add(col("a")))
        .from(&alias(&format!("t{}", n)))
        .into()
}

#[test]
fn test_set_operations_parenthesize_each_side() {
    let statement = union(
        except(table_query(1), table_query(2)),
        intersect(table_query(3), table_query(4)),
    );
    assert_eq!(
        sql(&Engine::generic(), statement),
        "((SELECT \"a\" FROM \"t1\") EXCEPT (SELECT \"a\" FROM \"t2\")) \
         UNION ((SELECT \"a\" FROM \"t3\") INTERSECT (SELECT \"a\" FROM \"t4\"))"
    );
    assert_eq!(
        sql(&Engine::generic(), union_all(table_query(1), table_query(2))),
        "(SELECT \"a\" FROM \"t1\") UNION ALL (SELECT \"a\" FROM \"t2\")"
    );
}

#[test]
fn test_compile_is_deterministic() {
    let engine = Engine::generic();
    let statement: Fragment = query(select().add(col("a")).add(val("x")))
        .from(&alias("t"))
        .filter(is_in(col("b"), [1, 2]))
        .into();
    let first = engine.compile_ref(&statement).unwrap();
    let second = engine.compile_ref(&statement).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_display_inlines_values() {
    let cond = Fragment::from(and().add(eq(col("a"), "it's")).add(gt(col("b"), 2)));
    assert_eq!(cond.to_string(), "a = 'it''s' AND b > 2");

    let p = Alias::typed::<Person>("p");
    assert_eq!(Fragment::from(p.col("Address.Street")).to_string(), "p.AddressStreet");

    assert_eq!(
        Fragment::from(case()).to_string(),
        "<invalid: Add at least one \"when\" clause.>"
    );
}

struct Person;
