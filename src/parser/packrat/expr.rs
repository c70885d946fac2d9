//! Grammar expressions and the constructors used to compose them
//!
//! ```text
//! lit("# ")            literal code points
//! seq([a, b])          a then b
//! one([a, b])          a, or else b (ordered choice)
//! rep(1, Some(70), a)  between 1 and 70 repetitions of a
//! class("digit", f)    one code point accepted by f
//! not(a)               succeeds without consuming when a fails
//! end()                no input left
//! name("Title", a)     capture the text a matched
//! rule("EndLine", a)   share one memoized identity under a name
//! ```

/// Predicate over a single code point.
pub type ClassFn = fn(char) -> bool;

/// A composable grammar expression. Build these with the constructor
/// functions and pack them with [`super::Grammar::pack`].
#[derive(Debug, Clone)]
pub enum Expr {
    Lit(String),
    Seq(Vec<Expr>),
    One(Vec<Expr>),
    Rep {
        min: usize,
        max: Option<usize>,
        expr: Box<Expr>,
    },
    Class(&'static str, ClassFn),
    Not(Box<Expr>),
    End,
    Name(&'static str, Box<Expr>),
    Rule(&'static str, Box<Expr>),
}

pub fn lit(text: &str) -> Expr {
    Expr::Lit(text.to_string())
}

pub fn seq(exprs: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::Seq(exprs.into_iter().collect())
}

pub fn one(exprs: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::One(exprs.into_iter().collect())
}

pub fn rep(min: usize, max: Option<usize>, expr: Expr) -> Expr {
    Expr::Rep {
        min,
        max,
        expr: Box::new(expr),
    }
}

pub fn opt(expr: Expr) -> Expr {
    rep(0, Some(1), expr)
}

pub fn many(expr: Expr) -> Expr {
    rep(0, None, expr)
}

pub fn some(expr: Expr) -> Expr {
    rep(1, None, expr)
}

pub fn class(label: &'static str, pred: ClassFn) -> Expr {
    Expr::Class(label, pred)
}

pub fn any() -> Expr {
    Expr::Class("any", |_| true)
}

pub fn not(expr: Expr) -> Expr {
    Expr::Not(Box::new(expr))
}

pub fn end() -> Expr {
    Expr::End
}

pub fn name(label: &'static str, expr: Expr) -> Expr {
    Expr::Name(label, Box::new(expr))
}

pub fn rule(label: &'static str, expr: Expr) -> Expr {
    Expr::Rule(label, Box::new(expr))
}
