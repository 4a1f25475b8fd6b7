use std::{fmt, hash::Hash};

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{AddEdgeError, RemoveEdgeError, Storage, Weight},
    DirectedGraph, UndirectedGraph,
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }

    // One past the vertex count so that out of range vertices are used too.
    fn vertex(&self, vertex_count: usize) -> usize {
        self.get(vertex_count + 1).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    AddVertex,
    AddEdge,
    RemoveVertex,
    RemoveEdge,
    ClearEdges,
}

/// Mutation operation that can be generated as part of [`MutOpsSeq`].
pub trait MutOp<'a>: Sized {
    /// Operation kinds supported by the graph type.
    const KINDS: &'static [OpKind];

    fn kind(&self) -> OpKind;

    fn arbitrary_of(kind: OpKind, u: &mut Unstructured<'a>) -> arbitrary::Result<Self>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum DirectedOp<W> {
    AddVertex,
    AddEdge(Index, Index, W),
    RemoveEdge(Index, Index),
    ClearEdges,
}

#[derive(Debug, PartialEq)]
pub enum DirectedOpResult<W> {
    AddVertex(usize),
    AddEdge(Result<Option<W>, AddEdgeError<W>>),
    RemoveEdge(Result<W, RemoveEdgeError>),
    ClearEdges,
}

impl<W: Weight> DirectedOp<W> {
    pub fn apply<S>(self, graph: &mut DirectedGraph<W, S>) -> DirectedOpResult<W>
    where
        S: Storage<W>,
    {
        let n = graph.vertex_count();

        match self {
            DirectedOp::AddVertex => DirectedOpResult::AddVertex(graph.add_vertex()),
            DirectedOp::AddEdge(src, dst, weight) => {
                DirectedOpResult::AddEdge(graph.try_add_edge(src.vertex(n), dst.vertex(n), weight))
            }
            DirectedOp::RemoveEdge(src, dst) => {
                DirectedOpResult::RemoveEdge(graph.try_remove_edge(src.vertex(n), dst.vertex(n)))
            }
            DirectedOp::ClearEdges => {
                graph.clear_edges();
                DirectedOpResult::ClearEdges
            }
        }
    }
}

impl<'a, W: Arbitrary<'a>> MutOp<'a> for DirectedOp<W> {
    const KINDS: &'static [OpKind] = &[
        OpKind::AddVertex,
        OpKind::AddEdge,
        OpKind::RemoveEdge,
        OpKind::ClearEdges,
    ];

    fn kind(&self) -> OpKind {
        match self {
            DirectedOp::AddVertex => OpKind::AddVertex,
            DirectedOp::AddEdge(_, _, _) => OpKind::AddEdge,
            DirectedOp::RemoveEdge(_, _) => OpKind::RemoveEdge,
            DirectedOp::ClearEdges => OpKind::ClearEdges,
        }
    }

    fn arbitrary_of(kind: OpKind, u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        match kind {
            OpKind::AddVertex => Ok(DirectedOp::AddVertex),
            OpKind::AddEdge => Ok(DirectedOp::AddEdge(
                u.arbitrary()?,
                u.arbitrary()?,
                u.arbitrary()?,
            )),
            OpKind::RemoveEdge => Ok(DirectedOp::RemoveEdge(u.arbitrary()?, u.arbitrary()?)),
            OpKind::ClearEdges => Ok(DirectedOp::ClearEdges),
            OpKind::RemoveVertex => Err(arbitrary::Error::IncorrectFormat),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UndirectedOp<V> {
    AddVertex(V),
    RemoveVertex(V),
    AddEdge(V, V),
    RemoveEdge(V, V),
    ClearEdges,
}

#[derive(Debug, PartialEq)]
pub enum UndirectedOpResult<V> {
    AddVertex(bool),
    RemoveVertex(Option<V>),
    AddEdge(Result<bool, AddEdgeError<()>>),
    RemoveEdge(Result<(), RemoveEdgeError>),
    ClearEdges,
}

impl<V> UndirectedOp<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    pub fn apply(self, graph: &mut UndirectedGraph<V>) -> UndirectedOpResult<V> {
        match self {
            UndirectedOp::AddVertex(v) => UndirectedOpResult::AddVertex(graph.add_vertex(v)),
            UndirectedOp::RemoveVertex(v) => {
                UndirectedOpResult::RemoveVertex(graph.remove_vertex(&v))
            }
            UndirectedOp::AddEdge(u, v) => UndirectedOpResult::AddEdge(graph.try_add_edge(u, v)),
            UndirectedOp::RemoveEdge(u, v) => {
                UndirectedOpResult::RemoveEdge(graph.try_remove_edge(&u, &v))
            }
            UndirectedOp::ClearEdges => {
                graph.clear_edges();
                UndirectedOpResult::ClearEdges
            }
        }
    }
}

impl<'a, V: Arbitrary<'a>> MutOp<'a> for UndirectedOp<V> {
    const KINDS: &'static [OpKind] = &[
        OpKind::AddVertex,
        OpKind::AddEdge,
        OpKind::RemoveVertex,
        OpKind::RemoveEdge,
        OpKind::ClearEdges,
    ];

    fn kind(&self) -> OpKind {
        match self {
            UndirectedOp::AddVertex(_) => OpKind::AddVertex,
            UndirectedOp::RemoveVertex(_) => OpKind::RemoveVertex,
            UndirectedOp::AddEdge(_, _) => OpKind::AddEdge,
            UndirectedOp::RemoveEdge(_, _) => OpKind::RemoveEdge,
            UndirectedOp::ClearEdges => OpKind::ClearEdges,
        }
    }

    fn arbitrary_of(kind: OpKind, u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        match kind {
            OpKind::AddVertex => Ok(UndirectedOp::AddVertex(u.arbitrary()?)),
            OpKind::RemoveVertex => Ok(UndirectedOp::RemoveVertex(u.arbitrary()?)),
            OpKind::AddEdge => Ok(UndirectedOp::AddEdge(u.arbitrary()?, u.arbitrary()?)),
            OpKind::RemoveEdge => Ok(UndirectedOp::RemoveEdge(u.arbitrary()?, u.arbitrary()?)),
            OpKind::ClearEdges => Ok(UndirectedOp::ClearEdges),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MutOpsSeq<Op>(pub Vec<Op>);

impl<Op> IntoIterator for MutOpsSeq<Op> {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, Op: MutOp<'a>> Arbitrary<'a> for MutOpsSeq<Op> {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let n_target = u.int_in_range(10..=1000)?;
        let r = u.nice_f64()?;

        let m_target = ((n_target * (n_target - 1) / 2) as f64 * r).round().max(1.0) as usize;

        let total = u.len().max(1);

        let mut n = 0usize;
        let mut m = 0usize;
        let mut seq = Vec::with_capacity(n_target);

        while !u.is_empty() {
            let rv = (n as f64 / n_target as f64).min(1.0);
            let re = (m as f64 / m_target as f64).min(1.0);
            let r = (total - u.len()) as f64 / total as f64;

            let op = match arbitrary_op::<Op>(u, rv, re, r) {
                Ok(op) => op,
                Err(_) => break,
            };

            match op.kind() {
                OpKind::AddVertex => n += 1,
                OpKind::RemoveVertex => n = n.saturating_sub(1),
                OpKind::AddEdge => m += 1,
                OpKind::RemoveEdge => m = m.saturating_sub(1),
                OpKind::ClearEdges => m = 0,
            }

            seq.push(op);
        }

        Ok(MutOpsSeq(seq))
    }
}

fn arbitrary_op<'a, Op: MutOp<'a>>(
    u: &mut Unstructured<'a>,
    rv: f64,
    re: f64,
    r: f64,
) -> arbitrary::Result<Op> {
    // The more vertices/edges are in the graph, the less is needed to add them.
    // The ratio of added vertices/edges is biased to be larger by averaging
    // with progress ratio.
    let wv = non_linear_decrease(0.4 * rv + 0.6 * r);
    let we = non_linear_decrease(0.6 * re + 0.4 * r);

    let choices = [
        OpKind::AddVertex,
        OpKind::AddEdge,
        OpKind::RemoveVertex,
        OpKind::RemoveEdge,
        OpKind::ClearEdges,
    ];

    // Removal weights are opposite to the adding weights, scaled down a little
    // bit. Clearing should be rare operation.
    let weights = [wv, we, (1.0 - wv) * 0.25, (1.0 - we) * 0.5, 0.01].map(|w| w.max(0.0));
    let weights = choices
        .iter()
        .zip(weights)
        .map(|(kind, w)| if Op::KINDS.contains(kind) { w } else { 0.0 })
        .collect::<Vec<_>>();

    let kind = *u.choose_weighted(&choices, &weights)?;
    Op::arbitrary_of(kind, u)
}

trait UnstructuredExt {
    fn nice_f64(&mut self) -> arbitrary::Result<f64>;
    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T>;
}

impl<'a> UnstructuredExt for Unstructured<'a> {
    fn nice_f64(&mut self) -> arbitrary::Result<f64> {
        const RESOLUTION: u8 = 100;
        let int = self.int_in_range(0..=RESOLUTION)?;
        Ok(int as f64 / RESOLUTION as f64)
    }

    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T> {
        if choices.is_empty() || choices.len() != weights.len() {
            return Err(arbitrary::Error::EmptyChoose);
        }

        let weight_sum = weights.iter().copied().sum::<f64>();

        let random = self.nice_f64()?;
        let bound = random * weight_sum;

        let mut acc = 0.0;
        let mut last = None;
        for (choice, weight) in choices.iter().zip(weights.iter().copied()) {
            if weight <= 0.0 {
                continue;
            }

            acc += weight;
            last = Some(choice);

            if acc >= bound {
                return Ok(choice);
            }
        }

        // Rounding errors in the sum.
        last.ok_or(arbitrary::Error::EmptyChoose)
    }
}

// f(0) = 1, f(1) ~= 0.152
fn non_linear_decrease(x: f64) -> f64 {
    1.0 / (x + 1.0).powf(std::f64::consts::E)
}
