use crate::store::VarType;
use regex::Regex;

pub const RESERVED_WORDS: [&str; 4] = ["integer", "double", "output", "if"];

/// Reserved words match case-insensitively; an identifier colliding with one
/// is rejected rather than silently shadowing the keyword.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.iter().any(|word| name.eq_ignore_ascii_case(word))
}

/// The two statement forms allowed both at top level and as a conditional
/// body. The conditional handler re-enters the same execution path as the
/// top-level dispatcher through this type.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign { name: String, expr: String },
    Output(Payload),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Expr(String),
}

/// Matches trimmed source lines against the fixed statement grammars.
pub struct Classifier {
    decl: Regex,
    assign: Regex,
    output: Regex,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Classifier {
            decl: Regex::new(r"(?i)^([A-Za-z]\w*)\s*:\s*(integer|double)\s*;\s*$").unwrap(),
            assign: Regex::new(r"^([A-Za-z]\w*)\s*(?::=|=)\s*(.+?)\s*;\s*$").unwrap(),
            output: Regex::new(r"(?i)^output\s*<<\s*(.+?)\s*;\s*$").unwrap(),
        }
    }

    /// `<identifier> : (integer|double) ;` — identifier case is preserved.
    pub fn declaration(&self, line: &str) -> Option<(String, VarType)> {
        let caps = self.decl.captures(line)?;
        let ty = if caps[2].eq_ignore_ascii_case("integer") {
            VarType::Integer
        } else {
            VarType::Double
        };
        Some((caps[1].to_string(), ty))
    }

    /// Assignment or output, the only forms besides declarations and
    /// conditionals. Assignment is tried first, mirroring the top-level
    /// matching order.
    pub fn simple_statement(&self, line: &str) -> Option<Stmt> {
        if let Some(caps) = self.assign.captures(line) {
            return Some(Stmt::Assign {
                name: caps[1].to_string(),
                expr: caps[2].to_string(),
            });
        }

        let caps = self.output.captures(line)?;
        let payload = &caps[1];
        if payload.len() >= 2 && payload.starts_with('"') && payload.ends_with('"') {
            return Some(Stmt::Output(Payload::Text(
                payload[1..payload.len() - 1].to_string(),
            )));
        }
        Some(Stmt::Output(Payload::Expr(payload.to_string())))
    }

    /// `if ( <condition> ) <statement>` — the condition runs to the close
    /// paren matching the opening one, so parenthesized arithmetic inside it
    /// stays intact. Returns the condition and the raw trailing statement.
    pub fn conditional(&self, line: &str) -> Option<(String, String)> {
        let rest = match line.get(..2) {
            Some(kw) if kw.eq_ignore_ascii_case("if") => &line[2..],
            _ => return None,
        };
        if rest.chars().next().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            return None;
        }

        let rest = rest.trim_start().strip_prefix('(')?;
        let mut depth = 1usize;
        for (i, c) in rest.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        let cond = rest[..i].trim();
                        let body = rest[i + 1..].trim();
                        if cond.is_empty() || body.is_empty() {
                            return None;
                        }
                        return Some((cond.to_string(), body.to_string()));
                    }
                }
                _ => {}
            }
        }
        None
    }
}
