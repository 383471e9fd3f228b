use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use crate::circuit::AigLike;
use crate::error::{AigError, PortKind};
use crate::fresh::fresh_name;
use crate::graph::Aig;
use crate::node::{Node, NodeKind};
use crate::primitives;

/// A circuit described as a deferred composition rather than a materialized
/// graph. Operators combine lazy circuits without evaluating anything; the
/// composed description is only walked when it is evaluated or flattened.
///
/// Every operator returns a new value and leaves its operands untouched.
/// Sub-descriptions are shared structurally, so composing the same circuit
/// into several results neither copies nor recomputes it.
#[derive(Debug, Clone)]
pub struct LazyAig {
    source: Rc<BatchSource>,
    inputs: BTreeSet<String>,
    node_map: BTreeMap<String, Node>,
    latch_map: BTreeMap<String, Node>,
    latch2init: BTreeMap<String, bool>,
    comments: Vec<String>,
}

/// The composition tree behind a [LazyAig]. Batch order is computed by a
/// pure traversal invoked fresh on every materialization, never by consuming
/// a stateful iterator.
#[derive(Debug)]
enum BatchSource {
    Leaf(Aig),

    /// Left's batches, then right's with every interface input replaced by a
    /// shim onto left's already-computed output node.
    Sequential {
        left: Rc<BatchSource>,
        right: Rc<BatchSource>,
        rewires: BTreeMap<String, Node>,
    },

    /// Left's batches then right's, eliding re-declarations of inputs the
    /// left side already emitted.
    Parallel {
        left: Rc<BatchSource>,
        right: Rc<BatchSource>,
    },

    /// Latch current-state variables renamed in the stream; a shim keeps
    /// references under the old name resolving.
    RenamedLatches {
        inner: Rc<BatchSource>,
        renames: BTreeMap<String, String>,
    },

    /// Feedback: input variables replaced by latch current-state variables.
    /// Keyed input name to latch name.
    Loopback {
        inner: Rc<BatchSource>,
        wires: BTreeMap<String, String>,
    },

    /// Latches opened into ports: latch current-state variables replaced by
    /// input variables. Keyed latch name to port name.
    CutLatches {
        inner: Rc<BatchSource>,
        cuts: BTreeMap<String, String>,
    },
}

impl BatchSource {
    fn batches(&self) -> Vec<Vec<Node>> {
        match self {
            BatchSource::Leaf(aig) => aig.node_batches(),

            BatchSource::Sequential {
                left,
                right,
                rewires,
            } => {
                let mut batches = left.batches();
                for batch in right.batches() {
                    let rewired = batch
                        .into_iter()
                        .map(|node| {
                            if let NodeKind::Input(name) = node.kind() {
                                if let Some(old) = rewires.get(name) {
                                    return Node::shim(node.clone(), old.clone());
                                }
                            }
                            node
                        })
                        .collect();
                    batches.push(rewired);
                }
                batches
            }

            BatchSource::Parallel { left, right } => {
                // A shared input name denotes one external signal; its second
                // declaration becomes an alias of the first.
                let mut seen: HashMap<String, Node> = HashMap::new();
                let mut batches = Vec::new();
                for batch in left.batches().into_iter().chain(right.batches()) {
                    let mut deduped = Vec::with_capacity(batch.len());
                    for node in batch {
                        if let NodeKind::Input(name) = node.kind() {
                            match seen.get(name) {
                                Some(first) => {
                                    deduped.push(Node::shim(node.clone(), first.clone()));
                                    continue;
                                }
                                None => {
                                    seen.insert(name.clone(), node.clone());
                                }
                            }
                        }
                        deduped.push(node);
                    }
                    batches.push(deduped);
                }
                batches
            }

            BatchSource::RenamedLatches { inner, renames } => {
                rewrite(inner, |node, batch| {
                    if let NodeKind::LatchIn(name) = node.kind() {
                        if let Some(new) = renames.get(name) {
                            let renamed = Node::latch_in(new.clone());
                            batch.push(renamed.clone());
                            batch.push(Node::shim(node.clone(), renamed));
                            return;
                        }
                    }
                    batch.push(node);
                })
            }

            BatchSource::Loopback { inner, wires } => rewrite(inner, |node, batch| {
                if let NodeKind::Input(name) = node.kind() {
                    if let Some(latch) = wires.get(name) {
                        let state = Node::latch_in(latch.clone());
                        batch.push(state.clone());
                        batch.push(Node::shim(node.clone(), state));
                        return;
                    }
                }
                batch.push(node);
            }),

            BatchSource::CutLatches { inner, cuts } => rewrite(inner, |node, batch| {
                if let NodeKind::LatchIn(name) = node.kind() {
                    if let Some(port) = cuts.get(name) {
                        let input = Node::input(port.clone());
                        batch.push(input.clone());
                        batch.push(Node::shim(node.clone(), input));
                        return;
                    }
                }
                batch.push(node);
            }),
        }
    }
}

fn rewrite(inner: &BatchSource, mut per_node: impl FnMut(Node, &mut Vec<Node>)) -> Vec<Vec<Node>> {
    inner
        .batches()
        .into_iter()
        .map(|batch| {
            let mut rewritten = Vec::with_capacity(batch.len());
            for node in batch {
                per_node(node, &mut rewritten);
            }
            rewritten
        })
        .collect()
}

/// The port pair a cut latch was opened into, along with the latch's
/// initial value. The same fresh name serves as both the current-state
/// input and the next-state output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutLatch {
    pub input: String,
    pub output: String,
    pub init: bool,
}

/// One feedback wire for [LazyAig::loopback]: `output` is fed back into
/// `input` through a new latch.
#[derive(Debug, Clone)]
pub struct Wiring {
    pub input: String,
    pub output: String,
    /// Name for the new latch; defaults to the input name.
    pub latch: Option<String>,
    /// The new latch's initial value.
    pub init: bool,
    /// Whether the output remains exposed after being consumed by feedback.
    pub keep_output: bool,
}

impl Wiring {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            latch: None,
            init: false,
            keep_output: true,
        }
    }

    pub fn latch(mut self, name: impl Into<String>) -> Self {
        self.latch = Some(name.into());
        self
    }

    pub fn init(mut self, init: bool) -> Self {
        self.init = init;
        self
    }

    pub fn keep_output(mut self, keep: bool) -> Self {
        self.keep_output = keep;
        self
    }
}

/// Flags for [LazyAig::unroll_with].
#[derive(Debug, Clone, Copy)]
pub struct Unroll {
    /// Fix time-0 latch state to the declared initial values. When false the
    /// time-0 state ports remain free inputs.
    pub init: bool,
    /// Drop the final step's next-state outputs.
    pub omit_latches: bool,
    /// Expose only the final step's outputs.
    pub only_last_outputs: bool,
}

impl Default for Unroll {
    fn default() -> Self {
        Self {
            init: true,
            omit_latches: true,
            only_last_outputs: false,
        }
    }
}

/// Lifts a circuit into the lazy form. Equivalent to `circ.into()`.
pub fn lazy(circ: impl Into<LazyAig>) -> LazyAig {
    circ.into()
}

impl From<Aig> for LazyAig {
    fn from(aig: Aig) -> Self {
        Self {
            inputs: aig.inputs().clone(),
            node_map: aig.node_map().clone(),
            latch_map: aig.latch_map().clone(),
            latch2init: aig.latch2init().clone(),
            comments: aig.comments().to_vec(),
            source: Rc::new(BatchSource::Leaf(aig)),
        }
    }
}

impl From<&Aig> for LazyAig {
    fn from(aig: &Aig) -> Self {
        aig.clone().into()
    }
}

impl LazyAig {
    /// Cascading composition: feed `self` into `other`. The interface is the
    /// set of names shared between `self`'s outputs and `other`'s inputs;
    /// `self`'s remaining outputs pass through untouched.
    ///
    /// Fails if a passthrough output collides with one of `other`'s outputs
    /// or the latch namespaces overlap.
    pub fn seq_compose(self, other: impl Into<LazyAig>) -> Result<LazyAig, AigError> {
        let other = other.into();

        let interface: BTreeSet<String> = self
            .node_map
            .keys()
            .filter(|name| other.inputs.contains(*name))
            .cloned()
            .collect();

        let collisions: Vec<String> = self
            .node_map
            .keys()
            .filter(|name| !interface.contains(*name) && other.node_map.contains_key(*name))
            .cloned()
            .collect();
        if !collisions.is_empty() {
            return Err(AigError::NameCollision {
                kind: PortKind::Output,
                names: collisions,
            });
        }
        let collisions: Vec<String> = self
            .latch_map
            .keys()
            .filter(|name| other.latch_map.contains_key(*name))
            .cloned()
            .collect();
        if !collisions.is_empty() {
            return Err(AigError::NameCollision {
                kind: PortKind::Latch,
                names: collisions,
            });
        }

        let rewires: BTreeMap<String, Node> = interface
            .iter()
            .map(|name| (name.clone(), self.node_map[name].clone()))
            .collect();

        let mut inputs = self.inputs;
        inputs.extend(
            other
                .inputs
                .iter()
                .filter(|name| !interface.contains(*name))
                .cloned(),
        );

        // Passthrough cannot clobber: collisions were rejected above.
        let mut node_map = other.node_map;
        for (name, node) in self.node_map {
            if !interface.contains(&name) {
                node_map.insert(name, node);
            }
        }

        let mut latch_map = self.latch_map;
        latch_map.extend(other.latch_map);
        let mut latch2init = self.latch2init;
        latch2init.extend(other.latch2init);

        let mut comments = self.comments;
        comments.extend(other.comments);

        Ok(LazyAig {
            source: Rc::new(BatchSource::Sequential {
                left: self.source,
                right: other.source,
                rewires,
            }),
            inputs,
            node_map,
            latch_map,
            latch2init,
            comments,
        })
    }

    /// Parallel composition. Inputs may overlap (a shared name denotes the
    /// same external signal); outputs and latches must not.
    pub fn par_compose(self, other: impl Into<LazyAig>) -> Result<LazyAig, AigError> {
        let other = other.into();

        let collisions: Vec<String> = self
            .node_map
            .keys()
            .filter(|name| other.node_map.contains_key(*name))
            .cloned()
            .collect();
        if !collisions.is_empty() {
            return Err(AigError::NameCollision {
                kind: PortKind::Output,
                names: collisions,
            });
        }
        let collisions: Vec<String> = self
            .latch_map
            .keys()
            .filter(|name| other.latch_map.contains_key(*name))
            .cloned()
            .collect();
        if !collisions.is_empty() {
            return Err(AigError::NameCollision {
                kind: PortKind::Latch,
                names: collisions,
            });
        }

        let mut inputs = self.inputs;
        inputs.extend(other.inputs);
        let mut node_map = self.node_map;
        node_map.extend(other.node_map);
        let mut latch_map = self.latch_map;
        latch_map.extend(other.latch_map);
        let mut latch2init = self.latch2init;
        latch2init.extend(other.latch2init);
        let mut comments = self.comments;
        comments.extend(other.comments);

        Ok(LazyAig {
            source: Rc::new(BatchSource::Parallel {
                left: self.source,
                right: other.source,
            }),
            inputs,
            node_map,
            latch_map,
            latch2init,
            comments,
        })
    }

    /// Rename ports of the given kind. `renames` maps old names to new ones.
    pub fn relabel(
        self,
        kind: PortKind,
        renames: &BTreeMap<String, String>,
    ) -> Result<LazyAig, AigError> {
        match kind {
            PortKind::Input => self.relabel_inputs(renames),
            PortKind::Output => self.relabel_outputs(renames),
            PortKind::Latch => self.relabel_latches(renames),
        }
    }

    /// Rename inputs by composing a fan-out adaptor upstream; the rewiring
    /// itself is ordinary sequential composition.
    pub fn relabel_inputs(self, renames: &BTreeMap<String, String>) -> Result<LazyAig, AigError> {
        check_renames(renames, &self.inputs, PortKind::Input)?;

        // Inputs and latches share no names.
        let collisions: Vec<String> = renames
            .values()
            .filter(|new| self.latch_map.contains_key(*new))
            .cloned()
            .collect();
        if !collisions.is_empty() {
            return Err(AigError::NameCollision {
                kind: PortKind::Input,
                names: collisions,
            });
        }

        let mut fanout: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (old, new) in renames {
            fanout.entry(new.clone()).or_default().push(old.clone());
        }

        LazyAig::from(primitives::tee(&fanout)?).seq_compose(self)
    }

    /// Rename outputs. A pure key rename; the node-batch stream is shared
    /// with the original untouched.
    pub fn relabel_outputs(
        mut self,
        renames: &BTreeMap<String, String>,
    ) -> Result<LazyAig, AigError> {
        let outputs = self.outputs();
        check_renames(renames, &outputs, PortKind::Output)?;

        let mut renamed = Vec::with_capacity(renames.len());
        for (old, new) in renames {
            if let Some(node) = self.node_map.remove(old) {
                renamed.push((new.clone(), node));
            }
        }
        self.node_map.extend(renamed);
        Ok(self)
    }

    /// Rename latches in the namespace maps and the node-batch stream.
    pub fn relabel_latches(
        mut self,
        renames: &BTreeMap<String, String>,
    ) -> Result<LazyAig, AigError> {
        let latches = self.latches();
        check_renames(renames, &latches, PortKind::Latch)?;

        // Inputs and latches share no names.
        let collisions: Vec<String> = renames
            .values()
            .filter(|new| self.inputs.contains(*new))
            .cloned()
            .collect();
        if !collisions.is_empty() {
            return Err(AigError::NameCollision {
                kind: PortKind::Latch,
                names: collisions,
            });
        }

        let mut renamed = Vec::with_capacity(renames.len());
        for (old, new) in renames {
            if let Some(node) = self.latch_map.remove(old) {
                renamed.push((new.clone(), node));
            }
            if let Some(init) = self.latch2init.remove(old) {
                self.latch2init.insert(new.clone(), init);
            }
        }
        self.latch_map.extend(renamed);

        self.source = Rc::new(BatchSource::RenamedLatches {
            inner: self.source,
            renames: renames.clone(),
        });
        Ok(self)
    }

    /// Convert the selected latches (all of them when `subset` is `None`)
    /// into input/output port pairs, named by the process-wide fresh-name
    /// generator. Returns the transformed circuit and a map from old latch
    /// name to its ports.
    pub fn cutlatches(
        self,
        subset: Option<&BTreeSet<String>>,
    ) -> Result<(LazyAig, BTreeMap<String, CutLatch>), AigError> {
        self.cutlatches_with(subset, |_| fresh_name())
    }

    /// [LazyAig::cutlatches] with an explicit renamer deciding the port name
    /// for each cut latch.
    pub fn cutlatches_with<F>(
        self,
        subset: Option<&BTreeSet<String>>,
        mut renamer: F,
    ) -> Result<(LazyAig, BTreeMap<String, CutLatch>), AigError>
    where
        F: FnMut(&str) -> String,
    {
        let selected: BTreeSet<String> = match subset {
            Some(latches) => {
                for name in latches {
                    if !self.latch_map.contains_key(name) {
                        return Err(AigError::UnknownName {
                            kind: PortKind::Latch,
                            name: name.clone(),
                        });
                    }
                }
                latches.clone()
            }
            None => self.latch_map.keys().cloned().collect(),
        };

        let mut inputs = self.inputs;
        let mut node_map = self.node_map;
        let mut latch_map = self.latch_map;
        let mut latch2init = self.latch2init;
        let mut cuts = BTreeMap::new();
        let mut ports = BTreeMap::new();

        for latch in &selected {
            let port = renamer(latch);
            if inputs.contains(&port) {
                return Err(AigError::NameCollision {
                    kind: PortKind::Input,
                    names: vec![port],
                });
            }
            if node_map.contains_key(&port) {
                return Err(AigError::NameCollision {
                    kind: PortKind::Output,
                    names: vec![port],
                });
            }
            // Reusing the cut latch's own name is fine (the latch is about
            // to disappear); shadowing any other latch is not.
            if port != *latch && latch_map.contains_key(&port) {
                return Err(AigError::NameCollision {
                    kind: PortKind::Latch,
                    names: vec![port],
                });
            }

            let next = latch_map.remove(latch).ok_or_else(|| AigError::UnknownName {
                kind: PortKind::Latch,
                name: latch.clone(),
            })?;
            let init = latch2init.remove(latch).ok_or_else(|| AigError::UnknownName {
                kind: PortKind::Latch,
                name: latch.clone(),
            })?;

            inputs.insert(port.clone());
            node_map.insert(port.clone(), next);
            cuts.insert(latch.clone(), port.clone());
            ports.insert(
                latch.clone(),
                CutLatch {
                    input: port.clone(),
                    output: port,
                    init,
                },
            );
        }

        let circ = LazyAig {
            source: Rc::new(BatchSource::CutLatches {
                inner: self.source,
                cuts,
            }),
            inputs,
            node_map,
            latch_map,
            latch2init,
            comments: self.comments,
        };
        Ok((circ, ports))
    }

    /// Close feedback loops: for each wiring, the named output is fed back
    /// into the named input through a new latch. The primitive for turning
    /// combinational circuits into sequential ones.
    pub fn loopback(self, wirings: impl IntoIterator<Item = Wiring>) -> Result<LazyAig, AigError> {
        let mut circ = self;
        for wiring in wirings {
            circ = circ.wire(wiring)?;
        }
        Ok(circ)
    }

    fn wire(self, wiring: Wiring) -> Result<LazyAig, AigError> {
        let Wiring {
            input,
            output,
            latch,
            init,
            keep_output,
        } = wiring;
        let latch = latch.unwrap_or_else(|| input.clone());

        if !self.inputs.contains(&input) {
            return Err(AigError::UnknownName {
                kind: PortKind::Input,
                name: input,
            });
        }
        if !self.node_map.contains_key(&output) {
            return Err(AigError::UnknownName {
                kind: PortKind::Output,
                name: output,
            });
        }
        if self.latch_map.contains_key(&latch) {
            return Err(AigError::NameCollision {
                kind: PortKind::Latch,
                names: vec![latch],
            });
        }

        let mut inputs = self.inputs;
        inputs.remove(&input);
        if inputs.contains(&latch) {
            return Err(AigError::NameCollision {
                kind: PortKind::Latch,
                names: vec![latch],
            });
        }

        let mut node_map = self.node_map;
        let next = node_map[&output].clone();
        if !keep_output {
            node_map.remove(&output);
        }

        let mut latch_map = self.latch_map;
        latch_map.insert(latch.clone(), next);
        let mut latch2init = self.latch2init;
        latch2init.insert(latch.clone(), init);

        let mut wires = BTreeMap::new();
        wires.insert(input, latch);

        Ok(LazyAig {
            source: Rc::new(BatchSource::Loopback {
                inner: self.source,
                wires,
            }),
            inputs,
            node_map,
            latch_map,
            latch2init,
            comments: self.comments,
        })
    }

    /// Unroll with the default flags: time-0 state fixed to the initial
    /// values, state ports omitted, all time steps' outputs exposed.
    pub fn unroll(self, horizon: usize) -> Result<LazyAig, AigError> {
        self.unroll_with(horizon, Unroll::default())
    }

    /// Expand the sequential circuit into one computing `horizon` steps of
    /// its behavior, with every port renamed `name##time_t`. Step `t`'s
    /// next-state outputs wire into step `t + 1`'s current-state inputs by
    /// sequential composition.
    pub fn unroll_with(self, horizon: usize, options: Unroll) -> Result<LazyAig, AigError> {
        if horizon == 0 {
            return Err(AigError::EmptyUnroll);
        }

        // Chaining wires every output of step t into any same-named input of
        // step t + 1, so an output sharing its name with an input (the shape
        // of a delay buffer) would be cross-wired into the next time step.
        // Such outputs work under placeholder names until the steps are
        // chained, then get their timed names back.
        let shadowed: Vec<String> = self
            .inputs
            .iter()
            .filter(|name| self.node_map.contains_key(*name))
            .cloned()
            .collect();
        let mut restore: BTreeMap<String, String> = BTreeMap::new();
        let circ = if shadowed.is_empty() {
            self
        } else {
            let placeholders: BTreeMap<String, String> = shadowed
                .into_iter()
                .map(|name| {
                    let placeholder = fresh_name();
                    restore.insert(placeholder.clone(), name.clone());
                    (name, placeholder)
                })
                .collect();
            self.relabel_outputs(&placeholders)?
        };

        let original_outputs = circ.outputs();
        let (cut, ports) = circ.cutlatches(None)?;

        // Each step needs its own node allocations: composing one shared
        // graph `horizon` times would re-memoize the same nodes with each
        // step's values and lose every step's outputs but the last. One
        // flatten of the (now combinational) cut circuit, then a symbolic
        // re-evaluation per step over time-stamped inputs.
        let flat = cut.flatten()?;
        let timed = |name: &str, t: usize| format!("{name}##time_{t}");

        let step = |t: usize| -> Result<LazyAig, AigError> {
            let bindings: BTreeMap<String, Node> = flat
                .inputs()
                .iter()
                .map(|name| (name.clone(), Node::input(timed(name, t))))
                .collect();
            let (node_map, _) = flat.eval_with(&bindings, &BTreeMap::new(), Node::constant(false))?;

            let inputs = flat.inputs().iter().map(|name| timed(name, t)).collect();
            let node_map = node_map
                .into_iter()
                .map(|(name, node)| (timed(&name, t + 1), node))
                .collect();
            let aig = Aig::new(inputs, node_map, BTreeMap::new(), BTreeMap::new(), Vec::new())?;
            Ok(aig.lazy())
        };

        let mut unrolled = step(0)?;
        for t in 1..horizon {
            unrolled = unrolled.seq_compose(step(t)?)?;
        }

        if options.init && !ports.is_empty() {
            let constants: BTreeMap<String, bool> = ports
                .values()
                .map(|port| (timed(&port.input, 0), port.init))
                .collect();
            unrolled = LazyAig::from(primitives::source(&constants)).seq_compose(unrolled)?;
        }

        if options.omit_latches && !ports.is_empty() {
            let residual: Vec<String> = ports
                .values()
                .map(|port| timed(&port.output, horizon))
                .collect();
            unrolled = unrolled.seq_compose(primitives::sink(residual))?;
        }

        if options.only_last_outputs && horizon > 1 {
            let premature: Vec<String> = (1..horizon)
                .flat_map(|t| original_outputs.iter().map(move |name| timed(name, t)))
                .collect();
            if !premature.is_empty() {
                unrolled = unrolled.seq_compose(primitives::sink(premature))?;
            }
        }

        if !restore.is_empty() {
            let mut back = BTreeMap::new();
            for (placeholder, original) in &restore {
                for t in 1..=horizon {
                    let from = timed(placeholder, t);
                    if unrolled.node_map.contains_key(&from) {
                        back.insert(from, timed(original, t));
                    }
                }
            }
            unrolled = unrolled.relabel_outputs(&back)?;
        }

        Ok(unrolled)
    }

    /// Append a free-text annotation.
    pub fn with_comment(mut self, text: impl Into<String>) -> Self {
        self.comments.push(text.into());
        self
    }
}

fn check_renames(
    renames: &BTreeMap<String, String>,
    existing: &BTreeSet<String>,
    kind: PortKind,
) -> Result<(), AigError> {
    for old in renames.keys() {
        if !existing.contains(old) {
            return Err(AigError::UnknownName {
                kind,
                name: old.clone(),
            });
        }
    }

    // New names must not merge with each other or with untouched ports.
    let mut taken: BTreeSet<String> = existing
        .iter()
        .filter(|name| !renames.contains_key(*name))
        .cloned()
        .collect();
    let collisions: Vec<String> = renames
        .values()
        .filter(|new| !taken.insert((*new).clone()))
        .cloned()
        .collect();
    if !collisions.is_empty() {
        return Err(AigError::NameCollision {
            kind,
            names: collisions,
        });
    }

    Ok(())
}

impl AigLike for LazyAig {
    fn inputs(&self) -> &BTreeSet<String> {
        &self.inputs
    }

    fn node_map(&self) -> &BTreeMap<String, Node> {
        &self.node_map
    }

    fn latch_map(&self) -> &BTreeMap<String, Node> {
        &self.latch_map
    }

    fn latch2init(&self) -> &BTreeMap<String, bool> {
        &self.latch2init
    }

    fn comments(&self) -> &[String] {
        &self.comments
    }

    fn node_batches(&self) -> Vec<Vec<Node>> {
        self.source.batches()
    }
}

impl<T: Into<LazyAig>> std::ops::Shr<T> for LazyAig {
    type Output = LazyAig;

    /// Cascading composition, feeding `self` into `rhs`. Panics on namespace
    /// collision; use [LazyAig::seq_compose] to handle the error instead.
    fn shr(self, rhs: T) -> Self::Output {
        match self.seq_compose(rhs) {
            Ok(circ) => circ,
            Err(err) => panic!("sequential composition failed: {err}"),
        }
    }
}

impl<T: Into<LazyAig>> std::ops::Shl<T> for LazyAig {
    type Output = LazyAig;

    /// Cascading composition, feeding `rhs` into `self`.
    fn shl(self, rhs: T) -> Self::Output {
        rhs.into() >> self
    }
}

impl<T: Into<LazyAig>> std::ops::BitOr<T> for LazyAig {
    type Output = LazyAig;

    /// Parallel composition. Panics on namespace collision; use
    /// [LazyAig::par_compose] to handle the error instead.
    fn bitor(self, rhs: T) -> Self::Output {
        match self.par_compose(rhs) {
            Ok(circ) => circ,
            Err(err) => panic!("parallel composition failed: {err}"),
        }
    }
}

impl<T: Into<LazyAig>> std::ops::Shr<T> for Aig {
    type Output = LazyAig;

    fn shr(self, rhs: T) -> Self::Output {
        self.lazy() >> rhs
    }
}

impl<T: Into<LazyAig>> std::ops::Shl<T> for Aig {
    type Output = LazyAig;

    fn shl(self, rhs: T) -> Self::Output {
        self.lazy() << rhs
    }
}

impl<T: Into<LazyAig>> std::ops::BitOr<T> for Aig {
    type Output = LazyAig;

    fn bitor(self, rhs: T) -> Self::Output {
        self.lazy() | rhs
    }
}
