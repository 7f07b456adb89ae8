//! Per-engine spelling and clause availability.

use pretty_assertions::assert_eq;

use super::{error, sql};
use crate::ast::builders::*;
use crate::ast::{Alias, Fragment};
use crate::engine::{Engine, OffsetStyle};
use crate::value::Value;

#[test]
fn test_bit_xor_dialects() {
    let mask = || bit_xor().add(col("col")).add(1).add(2);
    assert_eq!(sql(&Engine::generic(), mask()), "\"col\" ^ @p0 ^ @p1");
    assert_eq!(sql(&Engine::mysql(), mask()), "`col` ^ @p0 ^ @p1");
    assert_eq!(sql(&Engine::sql_server(), mask()), "[col] ^ @p0 ^ @p1");
    assert_eq!(
        sql(&Engine::oracle(), mask()),
        "BITXOR(BITXOR(\"COL\", :p0), :p1)"
    );
    assert_eq!(sql(&Engine::postgres(), mask()), "\"col\" # @p0 # @p1");

    let pair = || bit_xor().add(col("col")).add(1);
    assert_eq!(
        sql(&Engine::sqlite(), pair()),
        "((\"col\" | @p0) - (\"col\" & @p1))"
    );
    assert_eq!(
        sql(&Engine::sqlite(), mask()),
        "((((\"col\" | @p0) - (\"col\" & @p1)) | @p2) - (((\"col\" | @p3) - (\"col\" & @p4)) & @p5))"
    );
    assert_eq!(
        sql(&Engine::sqlite(), eq(bit_xor().add(plus().add(col("a")).add(1)).add(col("b")), 0)),
        "(((\"a\" + @p0) | \"b\") - ((\"a\" + @p1) & \"b\")) = @p2"
    );
}

#[test]
fn test_oracle_bitwise_and_modulo() {
    let engine = Engine::oracle();
    assert_eq!(
        sql(&engine, bit_and().add(col("a")).add(col("b"))),
        "BITAND(\"A\", \"B\")"
    );
    assert_eq!(
        sql(&engine, modulo().add(col("a")).add(2)),
        "MOD(\"A\", :p0)"
    );
    assert_eq!(
        sql(&engine, eq(bit_or().add(col("a")).add(1), 3)),
        "BITOR(\"A\", :p0) = :p1"
    );
}

#[test]
fn test_concat_dialects() {
    let joined = || concat().add(col("a")).add("x");
    assert_eq!(sql(&Engine::generic(), joined()), "\"a\" || @p0");
    assert_eq!(sql(&Engine::postgres(), joined()), "\"a\" || @p0");
    assert_eq!(sql(&Engine::mysql(), joined()), "CONCAT(`a`, @p0)");
    assert_eq!(sql(&Engine::sql_server(), joined()), "[a] + @p0");
}

#[test]
fn test_oracle_minus() {
    let q = |table: &str| -> Fragment {
        query(select().add(col("a"))).from(&alias(table)).into()
    };
    assert_eq!(
        sql(&Engine::oracle(), except(q("t1"), q("t2"))),
        "(SELECT \"A\" FROM \"T1\") MINUS (SELECT \"A\" FROM \"T2\")"
    );
    assert_eq!(
        sql(&Engine::oracle(), except_all(q("t1"), q("t2"))),
        "(SELECT \"A\" FROM \"T1\") MINUS ALL (SELECT \"A\" FROM \"T2\")"
    );
    assert_eq!(
        sql(&Engine::postgres(), except(q("t1"), q("t2"))),
        "(SELECT \"a\" FROM \"t1\") EXCEPT (SELECT \"a\" FROM \"t2\")"
    );
}

fn paged() -> Fragment {
    query(select().add(col("a")))
        .from(&alias("t"))
        .order_by(asc(col("a")))
        .offset(10)
        .limit(5)
        .into()
}

#[test]
fn test_offset_fetch() {
    let compiled = Engine::generic().compile(paged()).unwrap();
    assert_eq!(
        compiled.sql,
        "SELECT \"a\" FROM \"t\" ORDER BY \"a\" ASC OFFSET @p0 ROWS FETCH NEXT @p1 ROWS ONLY"
    );
    assert_eq!(compiled.parameters["@p0"], Value::Int(10));

    let limit_only = query(select().add(col("a")))
        .from(&alias("t"))
        .order_by(col("a"))
        .limit(5);
    assert_eq!(
        sql(&Engine::sql_server(), limit_only),
        "SELECT [a] FROM [t] ORDER BY [a] OFFSET 0 ROWS FETCH NEXT @p0 ROWS ONLY"
    );
}

#[test]
fn test_limit_offset() {
    let compiled = Engine::mysql().compile(paged()).unwrap();
    assert_eq!(
        compiled.sql,
        "SELECT `a` FROM `t` ORDER BY `a` ASC LIMIT @p0 OFFSET @p1"
    );
    assert_eq!(compiled.parameters["@p0"], Value::Int(5));
    assert_eq!(compiled.parameters["@p1"], Value::Int(10));
}

#[test]
fn test_offset_without_limit() {
    let skipped = || query(select().add(col("a"))).from(&alias("t")).offset(10);
    assert_eq!(
        sql(&Engine::mysql(), skipped()),
        "SELECT `a` FROM `t` LIMIT 18446744073709551615 OFFSET @p0"
    );
    assert_eq!(
        sql(&Engine::sqlite(), skipped()),
        "SELECT \"a\" FROM \"t\" LIMIT -1 OFFSET @p0"
    );
    assert_eq!(
        sql(&Engine::postgres(), skipped()),
        "SELECT \"a\" FROM \"t\" OFFSET @p0"
    );

    let compiled = Engine::sqlite().compile(skipped()).unwrap();
    assert_eq!(compiled.parameters.len(), 1);
    assert_eq!(compiled.parameters["@p0"], Value::Int(10));
}

#[test]
fn test_offset_not_supported() {
    let mut engine = Engine::generic();
    engine.options.offset_style = OffsetStyle::NotSupported;
    assert_eq!(
        error(&engine, paged()),
        "Offset clause is not supported in this engine."
    );
}

#[test]
fn test_top() {
    let mut engine = Engine::sql_server();
    let list = || select().top(top(10)).add(col("a"));
    assert_eq!(sql(&engine, list()), "SELECT TOP(@p0) [a]");

    let modified = select()
        .top(top(10).percent().unwrap().with_ties().unwrap())
        .add(col("a"));
    assert_eq!(sql(&engine, modified), "SELECT TOP(@p0) PERCENT WITH TIES [a]");

    engine.options.top_parameterized = false;
    assert_eq!(sql(&engine, list()), "SELECT TOP(10) [a]");

    assert_eq!(
        error(&Engine::mysql(), list()),
        "Top clause is not supported in this engine."
    );
}

#[test]
fn test_distinct_on_toggle() {
    let mut engine = Engine::postgres();
    let list = || select().distinct_on([col("a")]).add(col("a")).add(col("b"));
    let expected = "SELECT DISTINCT ON(\"a\") \"a\", \"b\"";
    assert_eq!(sql(&engine, list()), expected);

    engine.options.distinct_on_supported = false;
    assert_eq!(
        error(&engine, list()),
        "Distinct on clause is not supported in this engine."
    );

    engine.options.distinct_on_supported = true;
    assert_eq!(sql(&engine, list()), expected);

    assert_eq!(
        sql(&Engine::mysql(), select().distinct().add(col("a"))),
        "SELECT DISTINCT `a`"
    );
}

#[test]
fn test_dummy_table() {
    assert_eq!(sql(&Engine::oracle(), query(select().add(1))), "SELECT :p0 FROM DUAL");
    assert_eq!(sql(&Engine::generic(), query(select().add(1))), "SELECT @p0");
}

#[test]
fn test_table_alias_keyword() {
    let p = Alias::for_table("person", "p");
    let statement = || query(select().add(p.col("Id"))).from(&p);
    assert_eq!(
        sql(&Engine::oracle(), statement()),
        "SELECT \"P\".\"ID\" FROM \"PERSON\" \"P\""
    );
    assert_eq!(
        sql(&Engine::postgres(), statement()),
        "SELECT \"p\".\"id\" FROM \"person\" AS \"p\""
    );
}

#[test]
fn test_schema_qualified_table() {
    let p = Alias::for_table("persons", "p").in_schema("dbo");
    assert_eq!(
        sql(&Engine::sql_server(), query(select().add(p.all())).from(&p)),
        "SELECT [p].* FROM [dbo].[persons] AS [p]"
    );
}

#[test]
fn test_joins() {
    let a = Alias::for_table("ta", "a");
    let b = Alias::for_table("tb", "b");
    let on = || eq(a.col("id"), b.col("a_id"));
    let base = || query(select().add(a.col("x"))).from(&a);

    assert_eq!(
        sql(&Engine::generic(), base().left_join(&b, on())),
        "SELECT \"a\".\"x\" FROM \"ta\" AS \"a\" LEFT JOIN \"tb\" AS \"b\" ON \"a\".\"id\" = \"b\".\"a_id\""
    );
    assert_eq!(
        sql(&Engine::generic(), base().cross_join(&b)),
        "SELECT \"a\".\"x\" FROM \"ta\" AS \"a\" CROSS JOIN \"tb\" AS \"b\""
    );
    assert_eq!(
        error(&Engine::sqlite(), base().right_join(&b, on())),
        "Right join clause is not supported in this engine."
    );
    assert_eq!(
        error(&Engine::mysql(), base().full_join(&b, on())),
        "Full join clause is not supported in this engine."
    );
}

#[test]
fn test_function_spellings() {
    assert_eq!(sql(&Engine::generic(), length(col("a"))), "LENGTH(\"a\")");
    assert_eq!(sql(&Engine::mysql(), length(col("a"))), "CHAR_LENGTH(`a`)");
    assert_eq!(sql(&Engine::sql_server(), length(col("a"))), "LEN([a])");
    assert_eq!(
        sql(&Engine::oracle(), substring(col("a"), 1, 2)),
        "SUBSTR(\"A\", :p0, :p1)"
    );
    assert_eq!(sql(&Engine::oracle(), func("ceiling").arg(col("a"))), "CEIL(\"A\")");
    assert_eq!(sql(&Engine::generic(), now()), "NOW()");
    assert_eq!(sql(&Engine::sql_server(), now()), "GETDATE()");
    assert_eq!(sql(&Engine::oracle(), now()), "CURRENT_TIMESTAMP");
    assert_eq!(sql(&Engine::sqlite(), now()), "CURRENT_TIMESTAMP");
}

#[test]
fn test_trim_characters() {
    let engine = Engine::generic();
    assert_eq!(sql(&engine, trim(col("a"))), "TRIM(\"a\")");
    assert_eq!(sql(&engine, trim_chars(col("a"), "x")), "TRIM(@p0 FROM \"a\")");
    assert_eq!(
        sql(&engine, ltrim_chars(col("a"), "x")),
        "TRIM(LEADING @p0 FROM \"a\")"
    );
    assert_eq!(
        sql(&engine, rtrim_chars(col("a"), "x")),
        "TRIM(TRAILING @p0 FROM \"a\")"
    );
    assert_eq!(sql(&Engine::sqlite(), trim_chars(col("a"), "x")), "TRIM(\"a\", @p0)");
    assert_eq!(sql(&Engine::sqlite(), ltrim_chars(col("a"), "x")), "LTRIM(\"a\", @p0)");
    assert_eq!(sql(&Engine::sql_server(), ltrim_chars(col("a"), "x")), "LTRIM([a], @p0)");
}

#[test]
fn test_with_recursive() {
    let cte = with("tree", query(select().add(col("id"))).from(&alias("node"))).recursive();
    let statement = || query(select().add(col("id"))).with(cte.clone()).from(&alias("tree"));
    assert_eq!(
        sql(&Engine::postgres(), statement()),
        "WITH RECURSIVE \"tree\" AS (SELECT \"id\" FROM \"node\") SELECT \"id\" FROM \"tree\""
    );
    assert_eq!(
        sql(&Engine::sql_server(), statement()),
        "WITH [tree] AS (SELECT [id] FROM [node]) SELECT [id] FROM [tree]"
    );

    let with_columns = query(select().add(col("id")))
        .with(with("tree", query(select().add(col("id"))).from(&alias("node"))).columns(["id"]))
        .from(&alias("tree"));
    assert_eq!(
        sql(&Engine::generic(), with_columns),
        "WITH \"tree\" (\"id\") AS (SELECT \"id\" FROM \"node\") SELECT \"id\" FROM \"tree\""
    );
}

#[test]
fn test_oracle_parameter_prefix() {
    let compiled = Engine::oracle().compile(eq(col("a"), 1)).unwrap();
    assert_eq!(compiled.sql, "\"A\" = :p0");
    assert_eq!(compiled.parameters.names().collect::<Vec<_>>(), vec![":p0"]);
}
