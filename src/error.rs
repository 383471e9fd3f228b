/// The namespace a port name belongs to. Input, output, and latch names live
/// in separate namespaces; errors report which one a name was resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PortKind {
    Input,
    Output,
    Latch,
}

impl std::fmt::Display for PortKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PortKind::Input => "input",
            PortKind::Output => "output",
            PortKind::Latch => "latch",
        };
        f.write_str(name)
    }
}

/// Errors raised by composition, relabeling, and evaluation. Namespace and
/// malformed-request violations are reported at the call that introduced
/// them, never deferred to a later evaluation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AigError {
    #[error("{kind} namespace collision: {names:?}")]
    NameCollision { kind: PortKind, names: Vec<String> },

    #[error("no {kind} named {name:?}")]
    UnknownName { kind: PortKind, name: String },

    #[error("no value assigned to input {0:?}")]
    MissingInput(String),

    #[error("no state assigned to latch {0:?}")]
    MissingLatch(String),

    #[error("node batch referenced a value that has not been computed yet")]
    DanglingReference,

    #[error("unroll horizon must be at least 1")]
    EmptyUnroll,

    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
