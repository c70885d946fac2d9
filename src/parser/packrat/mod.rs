//! Packrat (memoized recursive-descent) matching engine
//!
//! A [`Grammar`] is an [`Expr`] tree packed into a flat arena so that every
//! sub-expression has a stable identity. Each call to [`Grammar::scan`]
//! builds a fresh memo table keyed by (expression, input position); an
//! expression is evaluated at most once per position and every retry during
//! backtracking is answered from the table. Total work is therefore bounded
//! by grammar size times input length.
//!
//! Not matching is an ordinary outcome (`None`), never an error.

mod cursor;
mod expr;


pub use cursor::{Cursor, Mark};
pub use expr::{
    any, class, end, lit, many, name, not, one, opt, rep, rule, seq, some, ClassFn, Expr,
};

use std::collections::HashMap;
use std::rc::Rc;

type ExprId = usize;

#[derive(Debug)]
enum Op {
    Lit(Vec<char>),
    Seq(Vec<ExprId>),
    One(Vec<ExprId>),
    Rep {
        min: usize,
        max: Option<usize>,
        expr: ExprId,
    },
    Class(ClassFn),
    Not(ExprId),
    End,
    Name(&'static str, ExprId),
}

impl Op {
    fn is_terminal(&self) -> bool {
        matches!(self, Op::Lit(_) | Op::Class(_) | Op::End)
    }
}

/// A packed, immutable grammar. Safe to share between threads; all parse
/// state lives in the per-scan memo table.
#[derive(Debug)]
pub struct Grammar {
    ops: Vec<Op>,
    root: ExprId,
}

impl Grammar {
    /// Pack an expression tree. Expressions wrapped in [`rule`] with the same
    /// name share one identity (and one memo slot per position); the first
    /// definition wins.
    pub fn pack(expr: Expr) -> Self {
        let mut packer = Packer::default();
        let root = packer.pack(expr);
        Self {
            ops: packer.ops,
            root,
        }
    }

    /// Match the grammar against the start of `input`.
    ///
    /// The match does not have to consume the whole input; end the grammar
    /// with [`end`] to require that.
    pub fn scan(&self, input: &str) -> Option<Match> {
        let mut packrat = Packrat::new(self, input);
        let Some(spans) = packrat.apply(self.root) else {
            tracing::trace!(
                input_len = packrat.cursor.len(),
                evaluated = packrat.misses,
                "grammar did not match"
            );
            return None;
        };
        Some(Match::new(&packrat.cursor, &spans))
    }
}

#[derive(Default)]
struct Packer {
    ops: Vec<Op>,
    rules: HashMap<&'static str, ExprId>,
}

impl Packer {
    fn push(&mut self, op: Op) -> ExprId {
        self.ops.push(op);
        self.ops.len() - 1
    }

    fn pack_all(&mut self, exprs: Vec<Expr>) -> Vec<ExprId> {
        exprs.into_iter().map(|e| self.pack(e)).collect()
    }

    fn pack(&mut self, expr: Expr) -> ExprId {
        match expr {
            Expr::Lit(text) => self.push(Op::Lit(text.chars().collect())),
            Expr::Seq(exprs) => {
                let ids = self.pack_all(exprs);
                self.push(Op::Seq(ids))
            }
            Expr::One(exprs) => {
                let ids = self.pack_all(exprs);
                self.push(Op::One(ids))
            }
            Expr::Rep { min, max, expr } => {
                let expr = self.pack(*expr);
                self.push(Op::Rep { min, max, expr })
            }
            Expr::Class(_, pred) => self.push(Op::Class(pred)),
            Expr::Not(expr) => {
                let expr = self.pack(*expr);
                self.push(Op::Not(expr))
            }
            Expr::End => self.push(Op::End),
            Expr::Name(label, expr) => {
                let expr = self.pack(*expr);
                self.push(Op::Name(label, expr))
            }
            Expr::Rule(label, expr) => {
                if let Some(&id) = self.rules.get(label) {
                    return id;
                }
                let id = self.pack(*expr);
                self.rules.insert(label, id);
                id
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Span {
    label: &'static str,
    start: Mark,
    end: Mark,
}

type Spans = Rc<[Span]>;

#[derive(Debug, Clone)]
struct Outcome {
    end: Mark,
    spans: Spans,
}

fn no_spans() -> Spans {
    Rc::from([])
}

/// State of one scan: the cursor and the memo table. Dropped when the scan
/// returns.
struct Packrat<'g> {
    grammar: &'g Grammar,
    cursor: Cursor,
    memo: HashMap<(ExprId, Mark), Option<Outcome>>,
    hits: usize,
    misses: usize,
}

impl<'g> Packrat<'g> {
    fn new(grammar: &'g Grammar, input: &str) -> Self {
        Self {
            grammar,
            cursor: Cursor::new(input),
            memo: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Apply one expression at the current position. On success the cursor
    /// sits after the match; on failure it is back where it started.
    fn apply(&mut self, id: ExprId) -> Option<Spans> {
        let start = self.cursor.mark();

        // terminals are cheaper to rerun than to look up
        if self.grammar.ops[id].is_terminal() {
            let found = self.eval(id);
            if found.is_none() {
                self.cursor.revert(start);
            }
            return found;
        }

        if let Some(entry) = self.memo.get(&(id, start)).cloned() {
            self.hits += 1;
            let outcome = entry?;
            self.cursor.revert(outcome.end);
            return Some(outcome.spans);
        }

        self.misses += 1;
        let entry = match self.eval(id) {
            Some(spans) => Some(Outcome {
                end: self.cursor.mark(),
                spans,
            }),
            None => {
                self.cursor.revert(start);
                None
            }
        };
        self.memo.insert((id, start), entry.clone());
        entry.map(|outcome| outcome.spans)
    }

    fn eval(&mut self, id: ExprId) -> Option<Spans> {
        let grammar = self.grammar;
        match &grammar.ops[id] {
            Op::Lit(chars) => {
                for &c in chars {
                    if self.cursor.advance() != Some(c) {
                        return None;
                    }
                }
                Some(no_spans())
            }
            Op::Seq(ids) => {
                let mut spans = Vec::new();
                for &sub in ids {
                    spans.extend_from_slice(&self.apply(sub)?);
                }
                Some(spans.into())
            }
            Op::One(ids) => ids.iter().find_map(|&sub| self.apply(sub)),
            Op::Rep { min, max, expr } => {
                let mut spans = Vec::new();
                let mut count = 0;
                while max.map_or(true, |max| count < max) {
                    let before = self.cursor.mark();
                    let Some(found) = self.apply(*expr) else {
                        break;
                    };
                    spans.extend_from_slice(&found);
                    count += 1;
                    // an empty match would repeat forever
                    if self.cursor.mark() == before {
                        count = count.max(*min);
                        break;
                    }
                }
                (count >= *min).then(|| spans.into())
            }
            Op::Class(pred) => match self.cursor.advance() {
                Some(c) if pred(c) => Some(no_spans()),
                _ => None,
            },
            Op::Not(sub) => {
                let start = self.cursor.mark();
                let found = self.apply(*sub);
                self.cursor.revert(start);
                match found {
                    Some(_) => None,
                    None => Some(no_spans()),
                }
            }
            Op::End => self.cursor.at_end().then(no_spans),
            Op::Name(label, sub) => {
                let start = self.cursor.mark();
                let inner = self.apply(*sub)?;
                let mut spans = Vec::with_capacity(inner.len() + 1);
                spans.push(Span {
                    label: *label,
                    start,
                    end: self.cursor.mark(),
                });
                spans.extend_from_slice(&inner);
                Some(spans.into())
            }
        }
    }
}

/// Text matched by a [`name`]d expression. Offsets count code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// A successful scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Number of code points consumed.
    pub len: usize,
    /// Captures in the order their expressions began matching.
    pub captures: Vec<Capture>,
}

impl Match {
    fn new(cursor: &Cursor, spans: &[Span]) -> Self {
        let captures = spans
            .iter()
            .map(|span| Capture {
                name: span.label,
                start: span.start.offset(),
                end: span.end.offset(),
                text: cursor.text(span.start, span.end),
            })
            .collect();
        Self {
            len: cursor.mark().offset(),
            captures,
        }
    }

    pub fn with_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Capture> + 'a {
        self.captures.iter().filter(move |c| c.name == name)
    }

    /// Text of the first capture called `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.captures
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.text.as_str())
    }
}
