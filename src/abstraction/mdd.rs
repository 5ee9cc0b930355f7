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

//! This module defines the `Config` trait, that is the bundle of collaborators
//! a decision diagram needs in order to develop its layers, along with the
//! enums describing how the diagram is to be compiled.

use crate::abstraction::dp::StateRepresentation;
use crate::common::{Error, Variable};
use crate::implementation::{Layer, Node};

/// The kind of decision diagram to compile.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CompilationType {
    /// No width limit is ever enforced
    Exact,
    /// Overly wide layers are shrunk by merging nodes (upper bound)
    Relaxed,
    /// Overly wide layers are shrunk by deleting nodes (lower bound)
    Restricted,
}

/// The kind of exact cutset a relaxed decision diagram yields.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CutsetType {
    /// The deepest exact layer which was developed before the first
    /// approximation took place.
    LastExactLayer,
    /// The exact nodes lying just above the approximation boundary (plus the
    /// exact nodes of the terminal layer). This is generally the tighter of
    /// the two.
    Frontier,
}

/// The config trait describes the configuration of a decision diagram. In
/// other words, it encapsulates the configurable behavior (problem,
/// relaxation, heuristics,..) of a diagram. Such a configuration is typically
/// obtained from a builder (see `mdd_builder`).
pub trait Config {
    /// The type of the states of the problem
    type State: StateRepresentation;

    // ------------------------------------------------------------------------
    // --- From the Problem definition ----------------------------------------
    // ------------------------------------------------------------------------
    /// Returns the number of variables of the problem.
    fn nb_vars(&self) -> usize;
    /// Yields the root node of the (exact) diagram standing for the problem.
    fn root_node(&self) -> Result<Node<Self::State>, Error>;
    /// Returns the children of `node` obtained by branching on `var`.
    fn successors(&self, node: &Node<Self::State>, var: usize) -> Result<Vec<Node<Self::State>>, Error>;

    // ------------------------------------------------------------------------
    // --- From the Relaxation ------------------------------------------------
    // ------------------------------------------------------------------------
    /// Merges the given `nodes` into one over-approximating node.
    fn merge(&self, nodes: &[Node<Self::State>]) -> Node<Self::State>;

    // ------------------------------------------------------------------------
    // --- The Heuristics -----------------------------------------------------
    // ------------------------------------------------------------------------
    /// Returns the variable to branch on when expanding `layer`.
    fn select_var(&self, free: &[Variable], layer: &Layer<Self::State>) -> Option<usize>;
    /// Returns the positions of the `k` nodes of `layer` to merge.
    fn select_merge(&self, layer: &Layer<Self::State>, k: usize) -> Vec<usize>;
    /// Returns the positions of the `k` nodes of `layer` to delete.
    fn select_delete(&self, layer: &Layer<Self::State>, k: usize) -> Vec<usize>;
}

/// The status of a decision diagram build.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Status {
    /// The diagram is being developed (or has not been developed yet)
    Building,
    /// The diagram has been developed down to its terminal layer
    Done,
    /// The deadline elapsed before the diagram could be completed
    TimedOut,
}

/// The outcome of a decision diagram build.
#[derive(Debug, Clone)]
pub enum Completion<S> {
    /// The build completed. It holds the best node of the terminal layer (if
    /// that layer is not empty).
    Finished(Option<Node<S>>),
    /// The deadline elapsed before the build could complete.
    TimedOut,
}
impl <S> Completion<S> {
    /// Returns true iff the build was interrupted by its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Completion::TimedOut)
    }
    /// Returns the value of the best node (if any).
    pub fn best_value(&self) -> Option<isize> {
        match self {
            Completion::Finished(Some(n)) => Some(n.value()),
            _                             => None,
        }
    }
}
