use std::fmt;

use serde::Serialize;

/// A directed edge between two nodes, carrying an opaque attachment
///
/// Equality is structural over `(from, to, attachment)`, so parallel edges
/// between the same pair of nodes stay distinct as long as their attachments
/// differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge<N, A> {
    from: N,
    to: N,
    attachment: A,
}

impl<N, A> Edge<N, A> {
    pub fn new(from: N, to: N, attachment: A) -> Self {
        Self {
            from,
            to,
            attachment,
        }
    }

    pub fn from(&self) -> &N {
        &self.from
    }

    pub fn to(&self) -> &N {
        &self.to
    }

    pub fn attachment(&self) -> &A {
        &self.attachment
    }

    pub fn into_parts(self) -> (N, N, A) {
        (self.from, self.to, self.attachment)
    }
}

impl<N: PartialEq, A> Edge<N, A> {
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl<N: fmt::Display, A> fmt::Display for Edge<N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
