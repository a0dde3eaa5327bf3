use crate::expr::Num;
use rustc_hash::FxHashMap;
use std::rc::Rc;

/// The type a variable was declared with. Immutable for the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Integer,
    Double,
}

/// A stored value, tagged with the declared type it was coerced to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Double(f64),
}

#[derive(Debug)]
struct Variable {
    ty: VarType,
    val: Option<Value>,
}

#[derive(Debug)]
pub struct AlreadyDeclared;

#[derive(Debug)]
pub enum LookupErr {
    Undeclared,
    Unassigned,
}

#[derive(Debug)]
pub enum AssignErr {
    Undeclared,
    NotConvertible,
}

/// Mapping from identifier to declared type and current value.
///
/// Names are case-sensitive and live for the whole run; a declaration is the
/// only way in and nothing is ever removed.
#[derive(Debug, Default)]
pub struct VarStore {
    vars: FxHashMap<Rc<str>, Variable>,
}

impl VarStore {
    pub fn new() -> Self {
        Default::default()
    }

    /// Insert a new variable with no value yet. Fails if the name is taken;
    /// the existing variable keeps its original type.
    pub fn declare(&mut self, name: &str, ty: VarType) -> Result<(), AlreadyDeclared> {
        if self.vars.contains_key(name) {
            return Err(AlreadyDeclared);
        }
        self.vars.insert(name.into(), Variable { ty, val: None });
        Ok(())
    }

    /// Coerce `num` to the variable's declared type and store it.
    ///
    /// Integer targets round half-away-from-zero; a result that is not finite
    /// or does not fit an `i64` is not convertible.
    pub fn assign(&mut self, name: &str, num: Num) -> Result<(), AssignErr> {
        let var = self.vars.get_mut(name).ok_or(AssignErr::Undeclared)?;
        let val = match var.ty {
            VarType::Integer => {
                let rounded = num.as_f64().round();
                if !rounded.is_finite() || rounded.abs() >= i64::MAX as f64 {
                    return Err(AssignErr::NotConvertible);
                }
                Value::Int(rounded as i64)
            }
            VarType::Double => Value::Double(num.as_f64()),
        };
        var.val = Some(val);
        Ok(())
    }

    /// Current value of a variable. Declared-but-unassigned names fail, so an
    /// expression can never see a silent default.
    pub fn lookup(&self, name: &str) -> Result<Value, LookupErr> {
        self.vars
            .get(name)
            .ok_or(LookupErr::Undeclared)?
            .val
            .ok_or(LookupErr::Unassigned)
    }

    pub fn ty_of(&self, name: &str) -> Option<VarType> {
        self.vars.get(name).map(|var| var.ty)
    }
}
