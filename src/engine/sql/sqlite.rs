use crate::ast::Fragment;
use crate::compiler::QueryBuilder;
use crate::engine::options::{OffsetStyle, Options};
use crate::engine::registry::{Registry, compile_fn, keyword_only};
use crate::error::{SqlError, SqlResult};

pub fn options() -> Options {
    Options {
        top_supported: false,
        offset_style: OffsetStyle::LimitOffset,
        unbounded_limit: Some("-1".to_string()),
        distinct_on_supported: false,
        right_join_supported: false,
        full_join_supported: false,
        ..Options::default()
    }
}

/// LTRIM / RTRIM / TRIM keep the `TRIM(x, chars)` argument order.
pub fn functions() -> Registry {
    let mut registry = super::common_functions();
    registry
        .add_as("SUBSTRING", "SUBSTR")
        .add_custom("NOW", keyword_only("CURRENT_TIMESTAMP"));
    registry
}

pub fn operators() -> Registry {
    let mut registry = Registry::new();
    registry.add_custom("BitXor", compile_fn(xor_chain));
    registry
}

/// No XOR operator: `a ^ b` becomes `((a | b) - (a & b))`, folded left.
fn xor_chain(b: &mut QueryBuilder<'_>, args: &[Fragment]) -> SqlResult<()> {
    match args {
        [] => Err(SqlError::EmptyList),
        [single] => xor_operand(b, single),
        [init @ .., last] => {
            b.push("((");
            xor_chain(b, init)?;
            b.push(" | ");
            xor_operand(b, last)?;
            b.push(") - (");
            xor_chain(b, init)?;
            b.push(" & ");
            xor_operand(b, last)?;
            b.push("))");
            Ok(())
        }
    }
}

fn xor_operand(b: &mut QueryBuilder<'_>, operand: &Fragment) -> SqlResult<()> {
    if let Fragment::Operation(_) = operand {
        b.push("(");
        b.compile(operand)?;
        b.push(")");
        Ok(())
    } else {
        b.compile(operand)
    }
}
