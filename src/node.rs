use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A node in an And-Inverter Graph. Nodes are cheap-to-clone handles over a
/// shared allocation, so a graph is a DAG by sharing rather than a tree.
///
/// The `&` and `!` operators should be preferred to constructing
/// [NodeKind::And] and [NodeKind::Not] directly, as they have the opportunity
/// to perform simplifications where a direct construction does not.
#[derive(Debug, Clone)]
pub struct Node(Rc<NodeKind>);

#[derive(Debug)]
pub enum NodeKind {
    /// The boolean constant false. True is represented as `Not(False)`.
    False,

    /// A free variable bound to a concrete or symbolic value at evaluation
    /// time. Two inputs with the same name are equivalent.
    Input(String),

    /// A free variable standing for a latch's current state. This is the only
    /// node kind that may be referenced without its defining expression being
    /// evaluated in the same pass, which is what makes feedback legal.
    LatchIn(String),

    /// Conjunction of two nodes.
    And(Node, Node),

    /// Negation of a node.
    Not(Node),

    /// A substitution instruction emitted only inside node-batch streams:
    /// once encountered, references to `new` resolve to the value already
    /// computed for `old`. Composition uses this to rewire an upstream output
    /// into a downstream input without rebuilding the graph.
    Shim { new: Node, old: Node },
}

impl Node {
    /// The constant node for the given boolean value.
    pub fn constant(value: bool) -> Self {
        let false_node = Node(Rc::new(NodeKind::False));
        if value {
            !false_node
        } else {
            false_node
        }
    }

    /// A free input variable with the given name.
    pub fn input(name: impl Into<String>) -> Self {
        Node(Rc::new(NodeKind::Input(name.into())))
    }

    /// The current-state variable of the latch with the given name.
    pub fn latch_in(name: impl Into<String>) -> Self {
        Node(Rc::new(NodeKind::LatchIn(name.into())))
    }

    pub(crate) fn shim(new: Node, old: Node) -> Self {
        Node(Rc::new(NodeKind::Shim { new, old }))
    }

    pub fn kind(&self) -> &NodeKind {
        &self.0
    }

    /// Identity of the underlying allocation. Evaluation memoizes per
    /// allocation rather than per structure: the same name may be rewired to
    /// different values at different points of a batch stream, so two
    /// structurally equal nodes do not necessarily carry the same value.
    pub(crate) fn addr(&self) -> *const NodeKind {
        Rc::as_ptr(&self.0)
    }

    pub fn is_false(&self) -> bool {
        matches!(self.kind(), NodeKind::False)
    }

    pub fn is_true(&self) -> bool {
        matches!(self.kind(), NodeKind::Not(x) if x.is_false())
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        // Shared subgraphs compare in constant time.
        if Rc::ptr_eq(&self.0, &other.0) {
            return true;
        }

        match (self.kind(), other.kind()) {
            (NodeKind::False, NodeKind::False) => true,
            (NodeKind::Input(lhs), NodeKind::Input(rhs)) => lhs == rhs,
            (NodeKind::LatchIn(lhs), NodeKind::LatchIn(rhs)) => lhs == rhs,
            (NodeKind::And(l0, l1), NodeKind::And(r0, r1)) => l0 == r0 && l1 == r1,
            (NodeKind::Not(lhs), NodeKind::Not(rhs)) => lhs == rhs,
            (
                NodeKind::Shim { new: l0, old: l1 },
                NodeKind::Shim { new: r0, old: r1 },
            ) => l0 == r0 && l1 == r1,
            _ => false,
        }
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self.kind()).hash(state);
        match self.kind() {
            NodeKind::False => (),
            NodeKind::Input(name) | NodeKind::LatchIn(name) => name.hash(state),
            NodeKind::And(lhs, rhs) => {
                lhs.hash(state);
                rhs.hash(state);
            }
            NodeKind::Not(x) => x.hash(state),
            NodeKind::Shim { new, old } => {
                new.hash(state);
                old.hash(state);
            }
        }
    }
}

impl std::ops::BitAnd for Node {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        if self.is_false() || rhs.is_true() {
            return self;
        }
        if rhs.is_false() || self.is_true() {
            return rhs;
        }

        Node(Rc::new(NodeKind::And(self, rhs)))
    }
}

impl std::ops::Not for Node {
    type Output = Self;

    fn not(self) -> Self::Output {
        if let NodeKind::Not(x) = self.kind() {
            return x.clone();
        }

        Node(Rc::new(NodeKind::Not(self)))
    }
}

impl std::ops::BitOr for Node {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        !(!self & !rhs)
    }
}

impl std::ops::BitXor for Node {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        (self.clone() & !rhs.clone()) | (!self & rhs)
    }
}
