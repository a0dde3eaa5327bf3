use crate::cond::{self, CondError};
use crate::diag::{DiagKind, Diagnostic};
use crate::expr::{self, ExprError, Num};
use crate::statement::{is_reserved, Classifier, Payload, Stmt};
use crate::store::{AssignErr, Value, VarStore, VarType};

/// Everything a run produces: the visible transcript in execution order and
/// the diagnostics in detection order. A run is clean iff no diagnostics
/// were recorded.
#[derive(Debug)]
pub struct RunReport {
    pub output: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub struct Interpreter {
    classifier: Classifier,
    vars: VarStore,
    output: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Interpreter {
            classifier: Classifier::new(),
            vars: VarStore::new(),
            output: vec![],
            diagnostics: vec![],
        }
    }

    /// One pass over the whole program. Lines are 1-based; a diagnostic on a
    /// line stops that line but never the run.
    pub fn interpret(&mut self, source: &str) {
        for (idx, raw) in source.lines().enumerate() {
            self.interpret_line(idx + 1, raw);
        }
    }

    pub fn interpret_line(&mut self, line_no: usize, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }
        if let Err(kind) = self.dispatch(line) {
            self.diagnostics.push(Diagnostic::new(line_no, kind));
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn get_global(&self, name: &str) -> Option<Value> {
        self.vars.lookup(name).ok()
    }

    pub fn into_report(self) -> RunReport {
        RunReport {
            output: self.output,
            diagnostics: self.diagnostics,
        }
    }

    // Matching order matters: declaration, assignment, output, conditional.
    // The first matching grammar claims the line.
    fn dispatch(&mut self, line: &str) -> Result<(), DiagKind> {
        if let Some((name, ty)) = self.classifier.declaration(line) {
            return self.declare(&name, ty);
        }
        if let Some(stmt) = self.classifier.simple_statement(line) {
            return self.exec(&stmt);
        }
        if let Some((cond, body)) = self.classifier.conditional(line) {
            return self.conditional(&cond, &body);
        }
        Err(DiagKind::UnrecognizedSyntax)
    }

    fn declare(&mut self, name: &str, ty: VarType) -> Result<(), DiagKind> {
        if is_reserved(name) {
            return Err(DiagKind::UnrecognizedSyntax);
        }
        self.vars
            .declare(name, ty)
            .map_err(|_| DiagKind::Redeclared(name.to_string()))
    }

    fn exec(&mut self, stmt: &Stmt) -> Result<(), DiagKind> {
        match stmt {
            Stmt::Assign { name, expr: text } => {
                if is_reserved(name) {
                    return Err(DiagKind::UnrecognizedSyntax);
                }
                if self.vars.ty_of(name).is_none() {
                    return Err(DiagKind::UndeclaredOnAssign(name.clone()));
                }
                let num = self.eval(text)?;
                self.vars.assign(name, num).map_err(|err| match err {
                    AssignErr::NotConvertible => DiagKind::ConversionFailure(name.clone()),
                    AssignErr::Undeclared => DiagKind::UndeclaredOnAssign(name.clone()),
                })
            }
            Stmt::Output(Payload::Text(text)) => {
                self.output.push(text.clone());
                Ok(())
            }
            Stmt::Output(Payload::Expr(text)) => {
                let num = self.eval(text)?;
                self.output.push(num.to_string());
                Ok(())
            }
        }
    }

    fn conditional(&mut self, cond: &str, body: &str) -> Result<(), DiagKind> {
        let truth = cond::eval(cond, &self.vars).map_err(|err| match err {
            CondError::InvalidFormat => DiagKind::InvalidConditionFormat(cond.to_string()),
            CondError::UnsupportedOperator(op) => DiagKind::UnsupportedOperator(op),
            CondError::Expr(e, side) => expr_diag(e, &side),
        })?;

        // A false condition skips the body without ever inspecting it.
        if !truth {
            return Ok(());
        }

        if !body.ends_with(';') {
            return Err(DiagKind::MalformedConditionalBody);
        }
        match self.classifier.simple_statement(body) {
            Some(stmt) => self.exec(&stmt),
            None => Err(DiagKind::MalformedConditionalBody),
        }
    }

    fn eval(&self, text: &str) -> Result<Num, DiagKind> {
        expr::eval(text, &self.vars).map_err(|err| expr_diag(err, text.trim()))
    }
}

fn expr_diag(err: ExprError, text: &str) -> DiagKind {
    match err {
        ExprError::IllegalCharacter => DiagKind::IllegalCharacter(text.to_string()),
        ExprError::Malformed => DiagKind::MalformedExpression(text.to_string()),
        ExprError::Undeclared(name) => DiagKind::UndeclaredInExpression(name),
        ExprError::Unassigned(name) => DiagKind::UsedBeforeAssignment(name),
    }
}
