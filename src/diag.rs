use std::fmt::{self, Display};

/// One recorded problem, tied to the 1-based source line it was found on.
///
/// Diagnostics never abort a run; they accumulate in detection order and a
/// line records at most one of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub line: Option<usize>,
    pub kind: DiagKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagKind) -> Self {
        Diagnostic {
            line: Some(line),
            kind,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "Line {}: ", line)?;
        }
        write!(f, "{}", self.kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiagKind {
    Redeclared(String),
    UndeclaredOnAssign(String),
    UndeclaredInExpression(String),
    UsedBeforeAssignment(String),
    IllegalCharacter(String),
    MalformedExpression(String),
    ConversionFailure(String),
    MalformedConditionalBody,
    InvalidConditionFormat(String),
    UnsupportedOperator(String),
    UnrecognizedSyntax,
}

impl Display for DiagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redeclared(name) => write!(f, "Variable '{name}' redeclared."),
            Self::UndeclaredOnAssign(name) => {
                write!(f, "Assignment to undeclared variable '{name}'.")
            }
            Self::UndeclaredInExpression(name) => {
                write!(f, "Undeclared variable '{name}' in expression.")
            }
            Self::UsedBeforeAssignment(name) => {
                write!(f, "Variable '{name}' used before assignment.")
            }
            Self::IllegalCharacter(expr) => {
                write!(f, "Illegal character in expression '{expr}'.")
            }
            Self::MalformedExpression(expr) => {
                write!(f, "Cannot evaluate expression '{expr}'.")
            }
            Self::ConversionFailure(name) => {
                write!(f, "Cannot convert value to integer for '{name}'.")
            }
            Self::MalformedConditionalBody => {
                write!(
                    f,
                    "Statement inside if must be an assignment or output ending in a semicolon."
                )
            }
            Self::InvalidConditionFormat(cond) => {
                write!(f, "Invalid condition format: '{cond}'.")
            }
            Self::UnsupportedOperator(op) => {
                write!(f, "Unsupported operator '{op}' in condition.")
            }
            Self::UnrecognizedSyntax => write!(f, "Unrecognized or invalid syntax."),
        }
    }
}
