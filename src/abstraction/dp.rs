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

//! This module defines the basic abstractions one will manipulate when
//! implementing a decision-diagram based optimization solver for some problem
//! formulated as a dynamic program.
//!
//! The most important abstractions that should be provided by a client are
//! `StateRepresentation`, `Problem` and `Relaxation`.

use std::hash::Hash;

use crate::common::{Error, Variable};
use crate::implementation::Node;

/// A state representation is an equivalence class over partial assignments.
/// Two partial assignments having equal representations are equivalent from
/// the point of view of the dynamic program: they admit the very same set of
/// completions. Hence, the engine safely collapses the nodes having equal
/// states (keeping the one with the larger accumulated value) when it develops
/// a layer of the decision diagram.
///
/// Hashing and equality are the ones of the `Hash` and `Eq` implementations
/// of the type, and the copy operation is the one of `Clone`.
pub trait StateRepresentation: Clone + Eq + Hash {
    /// Returns a numeric priority for the given `node` (which holds `self` as
    /// its state). This rank is used both to order the nodes of a layer when
    /// picking the nodes to merge or delete, and to order the open list of
    /// the branch and bound solver. Greater means more promising.
    ///
    /// # Note
    /// The rank is a heuristic ordering only. It does not need to be an
    /// admissible bound: pruning relies on the relaxed bound computed by
    /// the solver, never on the rank.
    fn rank(&self, node: &Node<Self>) -> isize;
}

/// This is the main abstraction that should be provided by any user of our
/// library. Indeed, it defines the problem to be solved in the form of a dynamic
/// program. Therefore, this trait closely sticks to the formal definition of a
/// dynamic program.
///
/// Any context the transition function needs (i.e. adjacency matrices, item
/// weights, precomputed bounds) belongs to the instance implementing this
/// trait and is reached through `&self`.
pub trait Problem {
    /// The type of states of the dynamic program
    type State: StateRepresentation;

    /// Returns the number of decision variables that play a role in the problem.
    fn nb_vars(&self) -> usize;
    /// Returns the initial state of the problem (when no decision is taken).
    fn initial_state(&self) -> Self::State;
    /// Returns the initial value of the objective function (when no decision is taken).
    fn initial_value(&self) -> isize;
    /// Returns the decision variables of the problem along with their initial
    /// domains. The identifiers of these variables must span `0..nb_vars()`.
    fn variables(&self) -> Result<Vec<Variable>, Error>;

    /// Returns the root node of the problem: the node standing for the empty
    /// assignment.
    ///
    /// This method is auto-implemented on the basis of `initial_state()`,
    /// `initial_value()` and `variables()`.
    fn root_node(&self) -> Result<Node<Self::State>, Error> {
        Node::root(self.initial_state(), self.initial_value(), self.variables()?)
    }

    /// Returns all the children of `node` obtained by binding the variable
    /// `var` to each of the values which are feasible given the partial state
    /// of `node`. Each child is expected to be derived with
    /// `node.successor(..)`.
    ///
    /// Returning no successor at all means that the branch is infeasible: it
    /// simply terminates there.
    fn successors(&self, node: &Node<Self::State>, var: usize) -> Result<Vec<Node<Self::State>>, Error>;
}

/// This is the second most important abstraction that a client should provide
/// when using this library. It defines the relaxation that may be applied to
/// the given problem. In particular, the `merge` method from this trait
/// defines how the nodes of a layer may be combined to provide an upper bound
/// approximation standing for an arbitrarily selected set of nodes.
pub trait Relaxation {
    /// The type of states this relaxation operates on
    type State: StateRepresentation;

    /// This method merges the given set of `nodes` into a new _inexact_ node
    /// standing for them all. The completions reachable from the returned node
    /// must be a superset of the union of the completions reachable from the
    /// merged nodes, and its value must be at least as large as the largest
    /// value among them. The slice is guaranteed to hold at least two nodes.
    ///
    /// In the theoretical framework of Bergman et al, this would amount to
    /// providing an implementation for the $\oplus$ operator. You should really
    /// only focus on that aspect when developing a relaxation: all the rest
    /// (exactness and cutset bookkeeping) is taken care of by the framework.
    fn merge(&self, nodes: &[Node<Self::State>]) -> Node<Self::State>;
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################
