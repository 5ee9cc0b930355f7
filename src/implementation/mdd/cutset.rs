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

//! This module provides the accumulator which collects the exact cutset (aka
//! the frontier) of a relaxed decision diagram while it is being developed.

use std::collections::BTreeSet;

use crate::implementation::{Node, NodeId};

/// The cutset accumulator of one decision diagram build.
///
/// Every exact node which is expanded gets registered in the arena of the
/// accumulator and receives a `NodeId`. Its children remember that id as one
/// of their exact parents. Whenever a node loses its exactness (because it
/// is merged or deduplicated with an inexact node), its exact parents are
/// recorded in the selected set. At the end of the build, the selected nodes
/// form the frontier: every path from the root to the terminal layer goes
/// through exactly one of them (or through an exact terminal node).
#[derive(Debug, Clone)]
pub struct Cutset<S> {
    enabled : bool,
    arena   : Vec<Node<S>>,
    selected: BTreeSet<NodeId>,
}
impl <S> Default for Cutset<S> {
    fn default() -> Self {
        Cutset { enabled: false, arena: vec![], selected: BTreeSet::new() }
    }
}
impl <S: Clone> Cutset<S> {
    /// Forgets everything about the previous build. The accumulator only
    /// tracks anything when it is `enabled`.
    pub fn reset(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.arena.clear();
        self.selected.clear();
    }
    /// Returns true iff this accumulator tracks the current build
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
    /// Registers an exact node which is about to be expanded and returns its
    /// identifier (`None` when tracking is disabled).
    pub fn register(&mut self, node: &Node<S>) -> Option<NodeId> {
        if self.enabled {
            let id = NodeId(self.arena.len());
            self.arena.push(node.clone());
            Some(id)
        } else {
            None
        }
    }
    /// Selects the given parents as members of the cutset.
    pub fn record<I: IntoIterator<Item=NodeId>>(&mut self, parents: I) {
        if self.enabled {
            self.selected.extend(parents);
        }
    }
    /// Selects an exact node of the terminal layer as member of the cutset.
    pub fn push_terminal(&mut self, node: Node<S>) {
        if self.enabled {
            let id = NodeId(self.arena.len());
            self.arena.push(node);
            self.selected.insert(id);
        }
    }
    /// Returns the number of selected nodes.
    pub fn len(&self) -> usize {
        self.selected.len()
    }
    /// Returns true iff no node has been selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
    /// Moves the selected nodes out of the accumulator and clears it.
    pub fn drain(&mut self) -> Vec<Node<S>> {
        let selected = std::mem::take(&mut self.selected);
        let arena    = std::mem::take(&mut self.arena);

        arena.into_iter().enumerate()
            .filter(|(i, _)| selected.contains(&NodeId(*i)))
            .map(|(_, mut node)| {
                node.clear_exact_parents();
                node
            })
            .collect()
    }
}
