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

//! This module provides the implementation of one layer of a decision diagram:
//! the set of nodes lying at one same depth, deduplicated by state.

use std::hash::Hash;

use log::trace;
use metrohash::MetroHashMap;

use crate::abstraction::{Config, StateRepresentation};
use crate::common::Error;
use crate::implementation::Node;
use crate::implementation::mdd::Cutset;

/// One layer of a decision diagram. No two nodes of a layer share the same
/// state.
#[derive(Debug, Clone)]
pub struct Layer<S> {
    nodes: Vec<Node<S>>,
    index: MetroHashMap<S, usize>,
    exact: bool,
    depth: usize,
}
impl <S> Default for Layer<S> {
    fn default() -> Self {
        Layer { nodes: vec![], index: MetroHashMap::default(), exact: true, depth: 0 }
    }
}

impl <S> Layer<S> {
    /// Creates a new empty (and exact) layer at the given depth
    pub fn new(depth: usize) -> Self {
        Layer { depth, ..Default::default() }
    }
    /// The number of variables bound by the nodes of this layer
    pub fn depth(&self) -> usize {
        self.depth
    }
    /// The number of nodes in this layer
    pub fn width(&self) -> usize {
        self.nodes.len()
    }
    /// Returns true iff this layer holds no node at all
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// The nodes of this layer (in no particular order)
    pub fn nodes(&self) -> &[Node<S>] {
        &self.nodes
    }
    /// Consumes this layer and yields its nodes
    pub fn into_nodes(self) -> Vec<Node<S>> {
        self.nodes
    }
    /// Returns true iff no node of this layer was ever approximated
    pub fn is_exact(&self) -> bool {
        self.exact
    }
    /// Returns true iff this layer is the terminal layer of a problem having
    /// `nb_vars` variables.
    pub fn is_final(&self, nb_vars: usize) -> bool {
        self.depth == nb_vars
    }
    /// Returns the node having the best value in this layer (if any).
    pub fn best(&self) -> Option<&Node<S>> {
        self.nodes.iter().max_by_key(|n| n.value())
    }
}

impl <S: Eq + Hash + Clone> Layer<S> {
    /// Adds a node to this layer. When some other node already holds the
    /// same state, the two are collapsed (see `Node::update`).
    pub fn add_node(&mut self, node: Node<S>) {
        self.exact &= node.is_exact();
        if let Some(pos) = self.index.get(node.state()) {
            self.nodes[*pos].update(node);
        } else {
            self.index.insert(node.state().clone(), self.nodes.len());
            self.nodes.push(node);
        }
    }

    /// Removes the nodes at the given positions. The positions must be
    /// distinct and sorted in decreasing order.
    fn remove_all(&mut self, positions: &[usize]) -> Vec<Node<S>> {
        let mut removed = Vec::with_capacity(positions.len());
        for pos in positions.iter().copied() {
            let node = self.nodes.swap_remove(pos);
            self.index.remove(node.state());
            if let Some(moved) = self.nodes.get(pos) {
                self.index.insert(moved.state().clone(), pos);
            }
            removed.push(node);
        }
        removed
    }
}

impl <S: StateRepresentation> Layer<S> {
    /// Develops the next layer of the diagram.
    ///
    /// The variable to branch on is chosen once for the whole layer. When
    /// the next layer happens to be wider than `max_width`, it is either
    /// relaxed (some of its nodes are merged, when `relaxed` is true) or
    /// restricted (some of its nodes are dropped).
    ///
    /// The cutset accumulator is fed with the exact nodes of this layer and
    /// with the exact parents of the nodes which lose their exactness.
    pub fn next_layer<C>(&mut self, config: &C, max_width: usize, relaxed: bool, cutset: &mut Cutset<S>)
        -> Result<Layer<S>, Error>
        where C: Config<State=S>
    {
        let mut next = Layer::new(self.depth + 1);
        let var = match self.nodes.first() {
            None       => return Ok(next),
            Some(node) => match node.free_variables().first() {
                None       => return Ok(next),
                Some(seed) => config.select_var(node.free_variables(), self).unwrap_or_else(|| seed.id()),
            }
        };

        for node in self.nodes.iter_mut() {
            let parent = if node.is_exact() {
                node.clear_exact_parents();
                cutset.register(node)
            } else {
                cutset.record(node.take_exact_parents());
                None
            };

            for mut child in config.successors(node, var)? {
                if let Some(id) = parent {
                    child.add_exact_parent(id);
                }
                if !node.is_exact() {
                    child.mark_inexact();
                }
                next.add_node(child);
            }
        }

        if relaxed {
            next.relax(config, max_width, cutset)?;
        } else {
            next.restrict(config, max_width)?;
        }
        Ok(next)
    }

    /// Merges nodes together until this layer fits in `max_width`.
    fn relax<C>(&mut self, config: &C, max_width: usize, cutset: &mut Cutset<S>) -> Result<(), Error>
        where C: Config<State=S>
    {
        let max_width = max_width.max(1);
        while self.width() > max_width {
            let k         = self.width() - max_width + 1;
            let selection = config.select_merge(self, k);
            let positions = validate_selection(selection, k, self.width())?;
            let mut removed = self.remove_all(&positions);

            for node in removed.iter_mut() {
                cutset.record(node.take_exact_parents());
            }
            let mut merged = config.merge(&removed);
            merged.mark_inexact();
            merged.clear_exact_parents();

            trace!("layer {}: merged {} nodes into one", self.depth, k);
            self.exact = false;
            self.add_node(merged);
        }
        Ok(())
    }

    /// Drops nodes until this layer fits in `max_width`.
    fn restrict<C>(&mut self, config: &C, max_width: usize) -> Result<(), Error>
        where C: Config<State=S>
    {
        if self.width() > max_width {
            let k         = self.width() - max_width;
            let selection = config.select_delete(self, k);
            let positions = validate_selection(selection, k, self.width())?;
            self.remove_all(&positions);

            trace!("layer {}: deleted {} nodes", self.depth, k);
            self.exact = false;
        }
        Ok(())
    }
}

/// Checks that a heuristic picked exactly `k` distinct nodes among the
/// `available` ones and returns their positions in decreasing order.
fn validate_selection(mut selection: Vec<usize>, k: usize, available: usize) -> Result<Vec<usize>, Error> {
    selection.sort_unstable_by(|a, b| b.cmp(a));
    selection.dedup();
    if selection.len() != k || selection.iter().any(|pos| *pos >= available) {
        Err(Error::InvalidSelection { expected: k, available })
    } else {
        Ok(selection)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
