// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the implementation of the nodes that are manipulated
//! when developing a decision diagram. A node materializes one partial
//! assignment of the decision variables along with the state it leads to.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::abstraction::StateRepresentation;
use crate::common::{Decision, Error, Variable};

/// The identifier of an exact node which has been registered in the cutset
/// accumulator of some decision diagram build. Nodes never point to their
/// parents directly: they only remember the identifiers of their exact
/// parents, which are resolved by the accumulator at the end of the build.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) usize);

/// A node of a decision diagram.
///
/// The variables of a node are partitioned in a prefix of bound variables
/// (the decisions leading from the root to this node) followed by a suffix
/// of free variables. The length of the bound prefix is the `layer` of the
/// node. Both the variable array and the map from variable ids to positions in
/// that array are shared among all the nodes derived from one another: they
/// are only copied when a node binds one more variable.
#[derive(Debug, Clone)]
pub struct Node<S> {
    variables    : Arc<Vec<Variable>>,
    index        : Arc<Vec<usize>>,
    state        : S,
    value        : isize,
    exact        : bool,
    relaxed_value: isize,
    exact_parents: BTreeSet<NodeId>,
    layer        : usize,
}

impl <S> Node<S> {
    /// Creates the root node of a problem.
    ///
    /// The identifiers of the given `variables` must form a permutation of
    /// `0..variables.len()`. Variables which are already bound are moved to
    /// the bound prefix (and count towards the layer of the node).
    pub fn root(state: S, value: isize, variables: Vec<Variable>) -> Result<Self, Error> {
        let n = variables.len();
        let mut slots: Vec<Option<Variable>> = vec![None; n];
        for var in variables {
            let id = var.id();
            match slots.get_mut(id) {
                None                => return Err(Error::UnknownVariable(id)),
                Some(Some(_))       => return Err(Error::DuplicateVariable(id)),
                Some(slot)          => *slot = Some(var),
            }
        }
        let (bound, free): (Vec<Variable>, Vec<Variable>) = slots.into_iter()
            .flatten()
            .partition(Variable::is_bound);

        let layer     = bound.len();
        let variables = bound.into_iter().chain(free).collect::<Vec<Variable>>();
        let mut index = vec![0; n];
        for (pos, var) in variables.iter().enumerate() {
            index[var.id()] = pos;
        }

        Ok(Node {
            variables    : Arc::new(variables),
            index        : Arc::new(index),
            state,
            value,
            exact        : true,
            relaxed_value: isize::MAX,
            exact_parents: BTreeSet::new(),
            layer
        })
    }

    /// Derives a child of this node: the child reaches `state` with an
    /// accumulated objective `value` after binding variable `var` to `val`.
    /// The child is exact iff this node is exact.
    ///
    /// This is how a `Problem` is expected to create the successors of a node.
    pub fn successor(&self, state: S, value: isize, var: usize, val: isize) -> Result<Self, Error> {
        let mut child = Node {
            variables    : Arc::clone(&self.variables),
            index        : Arc::clone(&self.index),
            state,
            value,
            exact        : self.exact,
            relaxed_value: isize::MAX,
            exact_parents: BTreeSet::new(),
            layer        : self.layer
        };
        child.assign(var, val)?;
        Ok(child)
    }

    /// Yields an inexact node sharing the variables of this one, but holding
    /// the given `state` and `value`. This is meant to be used when
    /// implementing a `Relaxation`.
    pub fn approximate(&self, state: S, value: isize) -> Self {
        Node {
            variables    : Arc::clone(&self.variables),
            index        : Arc::clone(&self.index),
            state,
            value,
            exact        : false,
            relaxed_value: isize::MAX,
            exact_parents: BTreeSet::new(),
            layer        : self.layer
        }
    }

    /// Binds the variable `var` to `val` and moves it to the end of the bound
    /// prefix. The shared arrays are only copied if some other node still
    /// refers to them.
    pub fn assign(&mut self, var: usize, val: isize) -> Result<(), Error> {
        let pos = *self.index.get(var).ok_or(Error::UnknownVariable(var))?;

        let mut bound = self.variables[pos].clone();
        bound.assign(val)?;

        let layer = self.layer;
        let vars  = Arc::make_mut(&mut self.variables);
        vars[pos] = bound;
        vars.swap(pos, layer);

        let index = Arc::make_mut(&mut self.index);
        index[vars[pos].id()]   = pos;
        index[vars[layer].id()] = layer;

        self.layer += 1;
        Ok(())
    }

    /// Absorbs `other`, a node having the same state as this one. When
    /// `other` has a better value, its path (variables) and value are adopted.
    /// The exactness flags are ANDed and the exact parents are merged.
    pub fn update(&mut self, other: Self) {
        if other.value > self.value {
            self.variables = other.variables;
            self.index     = other.index;
            self.value     = other.value;
        }
        self.exact &= other.exact;
        self.exact_parents.extend(other.exact_parents);
    }

    /// The state of this node
    pub fn state(&self) -> &S {
        &self.state
    }
    /// The value of the objective accumulated along the path to this node
    pub fn value(&self) -> isize {
        self.value
    }
    /// Returns true iff the value of this node is the actual best value of
    /// the partial assignments leading to its state.
    pub fn is_exact(&self) -> bool {
        self.exact
    }
    /// Forgets about the exactness of this node.
    pub fn mark_inexact(&mut self) {
        self.exact = false;
    }
    /// An upper bound on the value of any solution going through this node.
    pub fn relaxed_value(&self) -> isize {
        self.relaxed_value
    }
    /// Sets the upper bound on the value of any solution going through this node.
    pub fn set_relaxed_value(&mut self, ub: isize) {
        self.relaxed_value = ub;
    }
    /// The number of bound variables of this node.
    pub fn layer(&self) -> usize {
        self.layer
    }

    /// All variables (bound prefix followed by the free suffix)
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }
    /// The decided variables (in the order they were bound)
    pub fn bound_variables(&self) -> &[Variable] {
        &self.variables[..self.layer]
    }
    /// The variables which remain to be decided
    pub fn free_variables(&self) -> &[Variable] {
        &self.variables[self.layer..]
    }
    /// Returns the variable identified by `id` (if there is one).
    pub fn variable(&self, id: usize) -> Option<&Variable> {
        self.index.get(id).map(|pos| &self.variables[*pos])
    }

    /// The identifiers of the exact nodes this node descends from
    pub fn exact_parents(&self) -> &BTreeSet<NodeId> {
        &self.exact_parents
    }
    /// Remembers `parent` as one of the exact nodes this node descends from.
    pub fn add_exact_parent(&mut self, parent: NodeId) {
        self.exact_parents.insert(parent);
    }
    /// Moves the exact parents out of this node (leaving it with none).
    pub fn take_exact_parents(&mut self) -> BTreeSet<NodeId> {
        std::mem::take(&mut self.exact_parents)
    }
    /// Forgets about all the exact parents of this node.
    pub fn clear_exact_parents(&mut self) {
        self.exact_parents.clear();
    }

    /// The decisions leading from the root to this node (in the order they
    /// were taken).
    pub fn decisions(&self) -> Vec<Decision> {
        self.bound_variables().iter()
            .filter_map(|v| v.value().map(|value| Decision { variable: v.id(), value }))
            .collect()
    }
    /// The decisions leading from the root to this node sorted by variable.
    pub fn solution(&self) -> Vec<Decision> {
        let mut sol = self.decisions();
        sol.sort_unstable();
        sol
    }
}

impl <S: StateRepresentation> Node<S> {
    /// The heuristic priority of this node (see `StateRepresentation::rank`)
    pub fn rank(&self) -> isize {
        self.state.rank(self)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
