//! Input types for the statement builders.
//!
//! Columns, conditions, and SET clauses arrive either as pre-joined text or
//! as an ordered list of parts. Each shape is normalized exactly once, at
//! the call boundary, so every statement kind has a single canonical
//! implementation instead of one per input shape.

use crate::stmt::words::{join_words, join_words_with, to_set_clause};

/// Column specification for SELECT.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Columns {
    /// All columns (`*`).
    #[default]
    All,
    /// Pre-joined column sequence, e.g. `"id, name"`.
    Sequence(String),
    /// Ordered column names, joined with `", "` on resolve.
    List(Vec<String>),
}

impl Columns {
    /// Resolve to the final clause text; `None` means `*`.
    pub(crate) fn resolve(self) -> Option<String> {
        match self {
            Columns::All => None,
            Columns::Sequence(s) if s.is_empty() => None,
            Columns::Sequence(s) => Some(s),
            Columns::List(l) if l.is_empty() => None,
            Columns::List(l) => Some(join_words(&l)),
        }
    }
}

impl From<&str> for Columns {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Columns::All
        } else {
            Columns::Sequence(s.to_string())
        }
    }
}

impl From<String> for Columns {
    fn from(s: String) -> Self {
        if s.is_empty() {
            Columns::All
        } else {
            Columns::Sequence(s)
        }
    }
}

impl From<Option<&str>> for Columns {
    fn from(s: Option<&str>) -> Self {
        s.map_or(Columns::All, Columns::from)
    }
}

impl From<Vec<String>> for Columns {
    fn from(list: Vec<String>) -> Self {
        Columns::List(list)
    }
}

impl From<Vec<&str>> for Columns {
    fn from(list: Vec<&str>) -> Self {
        Columns::List(list.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Columns {
    fn from(list: &[&str]) -> Self {
        Columns::List(list.iter().map(|s| s.to_string()).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Columns {
    fn from(list: [&'a str; N]) -> Self {
        Columns::from(&list[..])
    }
}

/// Condition specification for WHERE clauses.
///
/// Fragment lists are joined with single spaces, so boolean operators are
/// supplied inline as their own fragments: `["id = 1", "AND", "price > 20"]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Conditions {
    /// No WHERE clause.
    #[default]
    None,
    /// Pre-built condition text, e.g. `"id = 1 AND name LIKE '%'"`.
    Raw(String),
    /// Ordered condition fragments, space-joined on resolve.
    Fragments(Vec<String>),
}

impl Conditions {
    /// Resolve to the final WHERE text; `None` omits the clause.
    pub(crate) fn resolve(self) -> Option<String> {
        match self {
            Conditions::None => None,
            Conditions::Raw(s) if s.is_empty() => None,
            Conditions::Raw(s) => Some(s),
            Conditions::Fragments(l) if l.is_empty() => None,
            Conditions::Fragments(l) => Some(join_words_with(&l, false, " ")),
        }
    }
}

impl From<&str> for Conditions {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Conditions::None
        } else {
            Conditions::Raw(s.to_string())
        }
    }
}

impl From<String> for Conditions {
    fn from(s: String) -> Self {
        if s.is_empty() {
            Conditions::None
        } else {
            Conditions::Raw(s)
        }
    }
}

impl From<Option<&str>> for Conditions {
    fn from(s: Option<&str>) -> Self {
        s.map_or(Conditions::None, Conditions::from)
    }
}

impl From<Vec<String>> for Conditions {
    fn from(list: Vec<String>) -> Self {
        Conditions::Fragments(list)
    }
}

impl From<Vec<&str>> for Conditions {
    fn from(list: Vec<&str>) -> Self {
        Conditions::Fragments(list.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Conditions {
    fn from(list: &[&str]) -> Self {
        Conditions::Fragments(list.iter().map(|s| s.to_string()).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Conditions {
    fn from(list: [&'a str; N]) -> Self {
        Conditions::from(&list[..])
    }
}

/// SET clause specification for UPDATE.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetClause {
    /// Pre-built assignment text, e.g. `"price = 20, name = 'bolt'"`.
    Raw(String),
    /// Column names; each becomes a `col = ?` placeholder pair on resolve.
    Columns(Vec<String>),
}

impl SetClause {
    /// Resolve to the final assignment text; `None` fails validation in
    /// [`build_update`](crate::build_update).
    pub(crate) fn resolve(self) -> Option<String> {
        match self {
            SetClause::Raw(s) if s.is_empty() => None,
            SetClause::Raw(s) => Some(s),
            SetClause::Columns(l) if l.is_empty() => None,
            SetClause::Columns(l) => Some(to_set_clause(&l)),
        }
    }
}

impl From<&str> for SetClause {
    fn from(s: &str) -> Self {
        SetClause::Raw(s.to_string())
    }
}

impl From<String> for SetClause {
    fn from(s: String) -> Self {
        SetClause::Raw(s)
    }
}

impl From<Vec<String>> for SetClause {
    fn from(list: Vec<String>) -> Self {
        SetClause::Columns(list)
    }
}

impl From<Vec<&str>> for SetClause {
    fn from(list: Vec<&str>) -> Self {
        SetClause::Columns(list.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for SetClause {
    fn from(list: &[&str]) -> Self {
        SetClause::Columns(list.iter().map(|s| s.to_string()).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for SetClause {
    fn from(list: [&'a str; N]) -> Self {
        SetClause::from(&list[..])
    }
}
