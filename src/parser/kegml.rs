//! KEGML grammars: the title line and include-list blocks of a node README
//!
//! ```text
//! EndLine      <- '\r'? '\n'
//! EndBlock     <- !. / EndLine !. / EndLine{2}
//! Title        <= uprint{1,70}
//! TitleLine    <- '#' ' ' Title EndBlock
//!
//! IncludeID    <= [0-9]+
//! Target       <- '../'? IncludeID ')'
//! IncludeItem  <- '* [' (!']' !EndLine .)* '](' Target LineRest (EndLine / !.)
//! SkippedItem  <- '* ' LineRest (EndLine / !.)
//! IncludeBlock <- EndLine (IncludeItem / SkippedItem)+
//! Document     <- (IncludeBlock / Line)* !.
//! ```
//!
//! An include block is a run of `* ` bullets directly after a blank line:
//!
//! ```text
//! * [Title to 3](../3)
//! * [Title to another](4)
//! ```
//!
//! Bullets whose target is not a bare integer or `../<integer>` are skipped
//! without ending the block.

use std::sync::LazyLock;

use unicode_general_category::{get_general_category, GeneralCategory};

use super::packrat::{
    any, class, end, lit, many, name, not, one, opt, rep, rule, seq, some, Expr, Grammar,
};
use crate::models::constants::MAX_TITLE_RUNES;

const TITLE: &str = "Title";
const INCLUDE_ID: &str = "IncludeID";

static TITLE_LINE: LazyLock<Grammar> = LazyLock::new(|| Grammar::pack(title_line()));
static DOCUMENT: LazyLock<Grammar> = LazyLock::new(|| Grammar::pack(document()));

/// Printable in the KEGML sense: letters, marks, numbers, punctuation,
/// symbols and the ASCII space. Other separators, control, format,
/// private-use, surrogate and unassigned code points are not.
pub fn is_print(c: char) -> bool {
    use GeneralCategory::*;

    c == ' '
        || !matches!(
            get_general_category(c),
            SpaceSeparator
                | LineSeparator
                | ParagraphSeparator
                | Control
                | Format
                | PrivateUse
                | Surrogate
                | Unassigned
        )
}

fn end_line() -> Expr {
    rule("EndLine", seq([opt(lit("\r")), lit("\n")]))
}

fn end_block() -> Expr {
    one([end(), seq([end_line(), end()]), rep(2, Some(2), end_line())])
}

fn title_line() -> Expr {
    seq([
        lit("#"),
        lit(" "),
        name(TITLE, rep(1, Some(MAX_TITLE_RUNES), class("uprint", is_print))),
        end_block(),
    ])
}

fn line_rest() -> Expr {
    rule("LineRest", many(seq([not(end_line()), any()])))
}

fn line_end() -> Expr {
    rule("LineEnd", one([end_line(), end()]))
}

fn include_item() -> Expr {
    let target = seq([
        opt(lit("../")),
        name(INCLUDE_ID, some(class("digit", |c| c.is_ascii_digit()))),
        lit(")"),
    ]);
    seq([
        lit("* ["),
        many(seq([not(lit("]")), not(end_line()), any()])),
        lit("]("),
        target,
        line_rest(),
        line_end(),
    ])
}

fn skipped_item() -> Expr {
    seq([lit("* "), line_rest(), line_end()])
}

fn include_block() -> Expr {
    seq([end_line(), some(one([include_item(), skipped_item()]))])
}

fn line() -> Expr {
    one([
        seq([line_rest(), end_line()]),
        seq([some(seq([not(end_line()), any()])), end()]),
    ])
}

fn document() -> Expr {
    seq([many(one([include_block(), line()])), end()])
}

/// Title from the first line of a node document.
///
/// Matches `#`, one space, and 1 to 70 printable code points followed by
/// the end of the input or a blank line. A longer title is not a title at
/// all; it is never cut down to 70.
pub fn parse_title(input: &str) -> Option<String> {
    let found = TITLE_LINE.scan(input)?;
    found.first(TITLE).map(String::from)
}

/// Node IDs named by every include block in a node document, in order.
pub fn parse_include_ids(input: &str) -> Vec<String> {
    DOCUMENT
        .scan(input)
        .map(|found| {
            found
                .with_name(INCLUDE_ID)
                .map(|capture| capture.text.clone())
                .collect()
        })
        .unwrap_or_default()
}
