//! Infix expression evaluation.
//!
//! Used by `ex`, `if`, the loop conditions, and Expression code values.
//! Precedence climbing over the raw text: the operand being read sits in the
//! top frame, digits and `.` are appended to it, and an operator takes the
//! top as its left side before evaluating its right side in place.
//!
//! Outside `"…"` quotes, bytes that are neither digits, operators nor
//! structure are ignored. `{…}` blocks evaluate as usual and their result
//! becomes the operand.

use std::cmp::Ordering;

use super::Interpreter;
use crate::errors::Flow;
use crate::source::{CLOSE, END, ESCAPE, NEXT, OPEN};
use crate::value::Value;

/// Binding strength, tightest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Unary,
    Power,
    Multiplicative,
    Additive,
    Shift,
    Relational,
    BitAnd,
    BitXor,
    BitOr,
    LogicalAnd,
    LogicalOr,
}

impl Precedence {
    /// The next tighter level.
    fn tighter(self) -> Precedence {
        match self {
            Precedence::Unary | Precedence::Power => Precedence::Unary,
            Precedence::Multiplicative => Precedence::Power,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Shift => Precedence::Additive,
            Precedence::Relational => Precedence::Shift,
            Precedence::BitAnd => Precedence::Relational,
            Precedence::BitXor => Precedence::BitAnd,
            Precedence::BitOr => Precedence::BitXor,
            Precedence::LogicalAnd => Precedence::BitOr,
            Precedence::LogicalOr => Precedence::LogicalAnd,
        }
    }
}

/// How an evaluation relates to parentheses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Group {
    /// Not inside any `(`; a stray `)` is skipped.
    Outside,
    /// An operand inside a group; `)` ends it but belongs to the opener.
    Inside,
    /// The evaluation a `(` started; consumes its `)`.
    Opener,
}

impl Group {
    fn operand(self) -> Group {
        match self {
            Group::Outside => Group::Outside,
            Group::Inside | Group::Opener => Group::Inside,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum BinaryOp {
    Pow,
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Shl,
    Shr,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    BitAnd,
    BitXor,
    BitOr,
    And,
    Or,
}

impl BinaryOp {
    fn precedence(self) -> Precedence {
        match self {
            BinaryOp::Pow => Precedence::Power,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => Precedence::Multiplicative,
            BinaryOp::Add | BinaryOp::Sub => Precedence::Additive,
            BinaryOp::Shl | BinaryOp::Shr => Precedence::Shift,
            BinaryOp::Lt
            | BinaryOp::Le
            | BinaryOp::Gt
            | BinaryOp::Ge
            | BinaryOp::Eq
            | BinaryOp::Ne => Precedence::Relational,
            BinaryOp::BitAnd => Precedence::BitAnd,
            BinaryOp::BitXor => Precedence::BitXor,
            BinaryOp::BitOr => Precedence::BitOr,
            BinaryOp::And => Precedence::LogicalAnd,
            BinaryOp::Or => Precedence::LogicalOr,
        }
    }

    /// Level the right operand is read at. Power is right-associative.
    fn operand_limit(self) -> Precedence {
        match self {
            BinaryOp::Pow => Precedence::Power,
            other => other.precedence().tighter(),
        }
    }

    fn apply(self, left: &Value, right: &Value) -> Value {
        let number = |f: fn(f64, f64) -> f64| Value::Number(f(left.to_number(), right.to_number()));
        let integer = |f: fn(i64, i64) -> i64| Value::Integer(f(left.to_integer(), right.to_integer()));
        let ordering = || left.compare(right);
        match self {
            BinaryOp::Pow => number(f64::powf),
            BinaryOp::Mul => number(|a, b| a * b),
            BinaryOp::Div => number(|a, b| a / b),
            BinaryOp::Mod => number(|a, b| a % b),
            BinaryOp::Add => number(|a, b| a + b),
            BinaryOp::Sub => number(|a, b| a - b),
            BinaryOp::Shl => integer(|a, b| {
                u32::try_from(b).ok().and_then(|b| a.checked_shl(b)).unwrap_or(0)
            }),
            BinaryOp::Shr => integer(|a, b| {
                u32::try_from(b).ok().and_then(|b| a.checked_shr(b)).unwrap_or(0)
            }),
            BinaryOp::BitAnd => integer(|a, b| a & b),
            BinaryOp::BitXor => integer(|a, b| a ^ b),
            BinaryOp::BitOr => integer(|a, b| a | b),
            BinaryOp::Lt => Value::Boolean(ordering() == Some(Ordering::Less)),
            BinaryOp::Le => Value::Boolean(matches!(
                ordering(),
                Some(Ordering::Less | Ordering::Equal)
            )),
            BinaryOp::Gt => Value::Boolean(ordering() == Some(Ordering::Greater)),
            BinaryOp::Ge => Value::Boolean(matches!(
                ordering(),
                Some(Ordering::Greater | Ordering::Equal)
            )),
            BinaryOp::Eq => Value::Boolean(ordering() == Some(Ordering::Equal)),
            BinaryOp::Ne => Value::Boolean(ordering() != Some(Ordering::Equal)),
            BinaryOp::And => Value::Boolean(left.to_boolean() && right.to_boolean()),
            BinaryOp::Or => Value::Boolean(left.to_boolean() || right.to_boolean()),
        }
    }
}

impl Interpreter {
    /// Clear the top frame and evaluate the next sibling into it as an
    /// expression.
    pub(crate) fn expr_next(&mut self) -> Flow {
        self.frames.clear_top();
        if self.has_next() {
            self.bump();
            self.eval_expr(Precedence::LogicalOr, Group::Outside)?;
        }
        Ok(())
    }

    fn eval_expr(&mut self, limit: Precedence, group: Group) -> Flow {
        walker_stack::ensure_sufficient_stack(|| self.eval_expr_inner(limit, group))
    }

    fn eval_expr_inner(&mut self, limit: Precedence, group: Group) -> Flow {
        let mut quoted = false;
        loop {
            let byte = self.peek();
            if byte == END {
                return Ok(());
            }
            if quoted {
                match byte {
                    b'"' => quoted = false,
                    ESCAPE => {
                        self.bump();
                        match self.peek() {
                            END => return Ok(()),
                            escaped => self.frames.append_byte(escaped),
                        }
                    }
                    _ => self.frames.append_byte(byte),
                }
                self.bump();
                continue;
            }

            match byte {
                b'"' => {
                    quoted = true;
                    self.bump();
                }
                b'0'..=b'9' | b'.' => {
                    self.frames.append_byte(byte);
                    self.bump();
                }
                NEXT | CLOSE => return Ok(()),
                OPEN => self.scan_nested()?,
                b'(' => {
                    self.bump();
                    self.eval_framed(Precedence::LogicalOr, Group::Opener)?;
                    self.frames.collapse();
                }
                b')' => match group {
                    Group::Opener => {
                        self.bump();
                        return Ok(());
                    }
                    Group::Inside => return Ok(()),
                    Group::Outside => self.bump(),
                },
                b'~' => {
                    self.bump();
                    self.eval_framed(Precedence::Unary, group.operand())?;
                    let operand = self.frames.take();
                    self.frames.assume(Value::Integer(!operand.to_integer()));
                    self.frames.collapse();
                }
                b'!' if self.peek_at(1) != b'=' => {
                    self.bump();
                    self.eval_framed(Precedence::Unary, group.operand())?;
                    let operand = self.frames.take();
                    self.frames.assume(Value::Boolean(!operand.to_boolean()));
                    self.frames.collapse();
                }
                ESCAPE => {
                    self.bump();
                    if self.peek() != END {
                        self.bump();
                    }
                }
                _ => match self.binary_operator() {
                    Some((op, _)) if op.precedence() > limit => return Ok(()),
                    Some((op, width)) => {
                        self.cursor = self.cursor.advanced(width);
                        let left = self.frames.take();
                        self.eval_expr(op.operand_limit(), group.operand())?;
                        let right = self.frames.take();
                        self.frames.assume(op.apply(&left, &right));
                    }
                    None => self.bump(),
                },
            }
        }
    }

    /// Evaluate into a fresh frame. On a signal the frame is discarded.
    fn eval_framed(&mut self, limit: Precedence, group: Group) -> Flow {
        self.frames.push();
        if let Err(signal) = self.eval_expr(limit, group) {
            self.frames.discard();
            return Err(signal);
        }
        Ok(())
    }

    /// The binary operator at the cursor and its width in bytes.
    fn binary_operator(&self) -> Option<(BinaryOp, u32)> {
        let second = self.peek_at(1);
        let op = match (self.peek(), second) {
            (b'*', b'*') => (BinaryOp::Pow, 2),
            (b'*', _) => (BinaryOp::Mul, 1),
            (b'/', _) => (BinaryOp::Div, 1),
            (b'%', _) => (BinaryOp::Mod, 1),
            (b'+', _) => (BinaryOp::Add, 1),
            (b'-', _) => (BinaryOp::Sub, 1),
            (b'<', b'<') => (BinaryOp::Shl, 2),
            (b'<', b'=') | (b'=', b'<') => (BinaryOp::Le, 2),
            (b'<', _) => (BinaryOp::Lt, 1),
            (b'>', b'>') => (BinaryOp::Shr, 2),
            (b'>', b'=') | (b'=', b'>') => (BinaryOp::Ge, 2),
            (b'>', _) => (BinaryOp::Gt, 1),
            (b'=', _) => (BinaryOp::Eq, 1),
            (b'!', b'=') => (BinaryOp::Ne, 2),
            (b'&', b'&') => (BinaryOp::And, 2),
            (b'&', _) => (BinaryOp::BitAnd, 1),
            (b'^', _) => (BinaryOp::BitXor, 1),
            (b'|', b'|') => (BinaryOp::Or, 2),
            (b'|', _) => (BinaryOp::BitOr, 1),
            _ => return None,
        };
        Some(op)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn power_is_right_associative() {
        assert_eq!(BinaryOp::Pow.operand_limit(), Precedence::Power);
        assert_eq!(BinaryOp::Sub.operand_limit(), Precedence::Multiplicative);
    }

    #[test]
    fn levels_are_ordered_tightest_first() {
        assert!(Precedence::Unary < Precedence::Power);
        assert!(Precedence::Relational < Precedence::BitAnd);
        assert!(Precedence::LogicalAnd < Precedence::LogicalOr);
    }

    #[test]
    fn shifts_out_of_range_yield_zero() {
        let shifted = BinaryOp::Shl.apply(&Value::Integer(1), &Value::Integer(64));
        assert_eq!(shifted, Value::Integer(0));
        let shifted = BinaryOp::Shr.apply(&Value::Integer(8), &Value::Integer(-1));
        assert_eq!(shifted, Value::Integer(0));
    }

    #[test]
    fn nan_is_only_unequal() {
        let nan = Value::Number(f64::NAN);
        assert_eq!(BinaryOp::Eq.apply(&nan, &nan), Value::Boolean(false));
        assert_eq!(BinaryOp::Lt.apply(&nan, &nan), Value::Boolean(false));
        assert_eq!(BinaryOp::Ne.apply(&nan, &nan), Value::Boolean(true));
    }
}
