use crate::expr::{self, ExprError};
use crate::store::VarStore;

#[derive(Debug, Clone, PartialEq)]
pub enum CondError {
    InvalidFormat,
    UnsupportedOperator(String),
    Expr(ExprError, String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CmpOp {
    Eq,
    Ne,
    Gt,
    Lt,
}

/// Evaluate a binary comparison `<expr> (==|!=|>|<) <expr>`.
///
/// The condition splits at the first operator occurrence; both sides go
/// through the expression evaluator and compare numerically, so integer and
/// double operands mix freely.
pub fn eval(cond: &str, vars: &VarStore) -> Result<bool, CondError> {
    let (left, op, right) = split(cond)?;

    let lhs = expr::eval(left, vars).map_err(|e| CondError::Expr(e, left.trim().to_string()))?;
    let rhs = expr::eval(right, vars).map_err(|e| CondError::Expr(e, right.trim().to_string()))?;

    let (a, b) = (lhs.as_f64(), rhs.as_f64());
    Ok(match op {
        CmpOp::Eq => a == b,
        CmpOp::Ne => a != b,
        CmpOp::Gt => a > b,
        CmpOp::Lt => a < b,
    })
}

fn split(cond: &str) -> Result<(&str, CmpOp, &str), CondError> {
    let bytes = cond.as_bytes();
    for i in 0..bytes.len() {
        let (op, width) = match bytes[i] {
            b'=' if bytes.get(i + 1) == Some(&b'=') => (CmpOp::Eq, 2),
            b'!' if bytes.get(i + 1) == Some(&b'=') => (CmpOp::Ne, 2),
            b'>' | b'<' if bytes.get(i + 1) == Some(&b'=') => {
                let op = &cond[i..i + 2];
                return Err(CondError::UnsupportedOperator(op.to_string()));
            }
            b'>' => (CmpOp::Gt, 1),
            b'<' => (CmpOp::Lt, 1),
            _ => continue,
        };

        let (left, right) = (&cond[..i], &cond[i + width..]);
        if left.trim().is_empty() || right.trim().is_empty() {
            return Err(CondError::InvalidFormat);
        }
        return Ok((left, op, right));
    }

    Err(CondError::InvalidFormat)
}
