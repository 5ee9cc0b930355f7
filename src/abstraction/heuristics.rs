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

//! This module defines the traits used to encapsulate solver heuristics.
//!
//! Namely, it defines :
//!
//!  - the `VariableSelector` which is used to pick the variable to branch on
//!    when developing the next layer of a decision diagram,
//!  - the `MergeSelector` which is used to pick the nodes that must be merged
//!    when a layer of a relaxed decision diagram is too wide,
//!  - the `DeleteSelector` which is used to pick the nodes that must be
//!    dropped when a layer of a restricted decision diagram is too wide.

use crate::common::Variable;
use crate::implementation::Layer;

/// This trait defines an heuristic to determine the best variable to branch on
/// while developing a given decision diagram.
pub trait VariableSelector<S> {
    /// Returns the id of the best variable to branch on from the set of
    /// `free` variables when expanding the given `layer`. It returns `None`
    /// in case the heuristic has no opinion, in which case the first free
    /// variable is used.
    fn select(&self, free: &[Variable], layer: &Layer<S>) -> Option<usize>;
}

/// This trait defines an heuristic to pick the nodes of a layer that are
/// merged together into one single relaxed node.
pub trait MergeSelector<S> {
    /// Returns the positions (in `layer.nodes()`) of exactly `k` distinct
    /// nodes that must be merged.
    fn select(&self, layer: &Layer<S>, k: usize) -> Vec<usize>;
}

/// This trait defines an heuristic to pick the nodes of a layer that are
/// dropped from a restricted decision diagram.
pub trait DeleteSelector<S> {
    /// Returns the positions (in `layer.nodes()`) of exactly `k` distinct
    /// nodes that must be deleted.
    fn select(&self, layer: &Layer<S>, k: usize) -> Vec<usize>;
}
