//! Surface-syntax rewriting applied before tokenizing.

use super::operator::Operator;

/// Remove every whitespace character.
pub fn strip_whitespace(expr: &str) -> String {
    expr.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Fold `+-` into `-` and insert the implicit `*` before a bracket.
///
/// Expects input without whitespace. `2(3+4)` becomes `2*(3+4)` and
/// `(1)(2)` becomes `(1)*(2)`; a bracket that follows an operator or
/// another opening bracket is left alone.
pub fn desugar(expr: &str) -> String {
    let folded = expr.replace("+-", "-");

    let mut result = String::with_capacity(folded.len() + 4);
    let mut previous: Option<char> = None;
    for c in folded.chars() {
        if c == '('
            && let Some(prev) = previous
            && !Operator::is_symbol(prev)
            && prev != '('
        {
            result.push(Operator::Multiply.symbol());
        }
        result.push(c);
        previous = Some(c);
    }

    result
}
