use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<E> {
    pub attr: E,
    pub kind: AddEdgeErrorKind,
}

impl<E> AddEdgeError<E> {
    pub fn new(attr: E, kind: AddEdgeErrorKind) -> Self {
        Self { attr, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
    SelfLoop,
    NegativeWeight,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
            AddEdgeErrorKind::SelfLoop => "the graph does not allow self-loops",
            AddEdgeErrorKind::NegativeWeight => "the graph does not allow negative weights",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("removing edge failed: {kind}")]
pub struct RemoveEdgeError {
    pub kind: RemoveEdgeErrorKind,
}

impl RemoveEdgeError {
    pub fn new(kind: RemoveEdgeErrorKind) -> Self {
        Self { kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoveEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
    SelfLoop,
    EdgeAbsent,
}

impl fmt::Display for RemoveEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RemoveEdgeErrorKind::SourceAbsent => "source does not exist",
            RemoveEdgeErrorKind::DestinationAbsent => "destination does not exist",
            RemoveEdgeErrorKind::SelfLoop => "self-loops never exist in the graph",
            RemoveEdgeErrorKind::EdgeAbsent => "edge does not exist",
        };
        f.write_str(reason)
    }
}
