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

//! This module provides the implementation of a decision diagram which is
//! developed layer by layer. The very same structure is used to compile
//! exact, restricted and relaxed diagrams.

use std::time::Instant;

use log::debug;

use crate::abstraction::{CompilationType, Completion, Config, CutsetType, Status};
use crate::common::Error;
use crate::implementation::Node;
use crate::implementation::mdd::{Cutset, Layer};

/// A decision diagram, developed one layer at a time from its root node.
///
/// Each build (`solve_exact`, `solve_restricted` or `solve_relaxed`) starts
/// over from the root node (which defaults to the root of the problem, see
/// `set_initial_state`) and leaves the diagram in a state where its best
/// node, exactness and cutset can be queried.
pub struct Diagram<C: Config> {
    config     : C,
    cutset_type: CutsetType,
    root       : Option<Node<C::State>>,
    cutset     : Cutset<C::State>,
    exact_cut  : Vec<Node<C::State>>,
    best       : Option<Node<C::State>>,
    exact      : bool,
    status     : Status,
}

impl <C: Config> Diagram<C> {
    /// Creates a diagram which develops its layers with the given `config`.
    pub fn new(config: C) -> Self {
        Diagram {
            config,
            cutset_type: CutsetType::Frontier,
            root       : None,
            cutset     : Cutset::default(),
            exact_cut  : vec![],
            best       : None,
            exact      : true,
            status     : Status::Building,
        }
    }
    /// The configuration (problem, relaxation, heuristics) of this diagram
    pub fn config(&self) -> &C {
        &self.config
    }
    /// Sets the kind of cutset produced by the subsequent relaxed builds.
    pub fn with_cutset_type(mut self, cutset_type: CutsetType) -> Self {
        self.cutset_type = cutset_type;
        self
    }
    /// Same as `with_cutset_type` on a diagram which is already in use.
    pub fn set_cutset_type(&mut self, cutset_type: CutsetType) {
        self.cutset_type = cutset_type;
    }
    /// The kind of cutset produced by the relaxed builds
    pub fn cutset_type(&self) -> CutsetType {
        self.cutset_type
    }

    /// Uses `node` as the root of the subsequent builds. This clears the
    /// results of the previous build.
    pub fn set_initial_state(&mut self, node: Node<C::State>) {
        self.root   = Some(node);
        self.clear();
    }
    fn clear(&mut self) {
        self.cutset.reset(false);
        self.exact_cut.clear();
        self.best   = None;
        self.exact  = true;
        self.status = Status::Building;
    }

    /// Returns true iff the last build did not perform any approximation
    /// (and completed).
    pub fn is_exact(&self) -> bool {
        self.exact
    }
    /// The status of the last build
    pub fn status(&self) -> Status {
        self.status
    }
    /// The best node of the terminal layer of the last build.
    pub fn best_node(&self) -> Option<&Node<C::State>> {
        self.best.as_ref()
    }
    /// The exact cutset of the last relaxed build.
    pub fn exact_cutset(&self) -> &[Node<C::State>] {
        &self.exact_cut
    }
    /// Moves the exact cutset of the last relaxed build out of the diagram.
    pub fn take_exact_cutset(&mut self) -> Vec<Node<C::State>> {
        std::mem::take(&mut self.exact_cut)
    }

    /// Develops the complete (exact) diagram.
    pub fn solve_exact(&mut self, deadline: Option<Instant>) -> Result<Completion<C::State>, Error> {
        self.develop(CompilationType::Exact, usize::MAX, deadline)
    }
    /// Develops a restricted diagram whose layers hold at most `width` nodes.
    /// Its best node is a lower bound on the optimum.
    pub fn solve_restricted(&mut self, width: usize, deadline: Option<Instant>) -> Result<Completion<C::State>, Error> {
        self.develop(CompilationType::Restricted, width, deadline)
    }
    /// Develops a relaxed diagram whose layers hold at most `width` nodes.
    /// Its best node is an upper bound on the optimum.
    pub fn solve_relaxed(&mut self, width: usize, deadline: Option<Instant>) -> Result<Completion<C::State>, Error> {
        self.develop(CompilationType::Relaxed, width, deadline)
    }

    fn develop(&mut self, kind: CompilationType, width: usize, deadline: Option<Instant>) -> Result<Completion<C::State>, Error> {
        self.clear();
        let root = match &self.root {
            Some(node) => node.clone(),
            None       => self.config.root_node()?,
        };
        let relaxed  = kind == CompilationType::Relaxed;
        let frontier = relaxed && self.cutset_type == CutsetType::Frontier;
        self.cutset.reset(frontier);

        let nb_vars    = self.config.nb_vars();
        let root_depth = root.layer();
        let width      = width.max(1);

        let mut last_exact = None;
        let mut current    = Layer::new(root_depth);
        current.add_node(root);
        self.exact = current.is_exact();

        while !current.is_final(nb_vars) && !current.is_empty() {
            if deadline.map_or(false, |d| Instant::now() >= d) {
                self.clear();
                self.exact  = false;
                self.status = Status::TimedOut;
                return Ok(Completion::TimedOut);
            }

            // the layer directly below the root is never approximated
            let max_width = if kind == CompilationType::Exact || current.depth() == root_depth {
                usize::MAX
            } else {
                width
            };

            let next = current.next_layer(&self.config, max_width, relaxed, &mut self.cutset)?;
            if last_exact.is_none() && current.is_exact() && !next.is_exact() {
                last_exact = Some(std::mem::replace(&mut current, next).into_nodes());
            } else {
                current = next;
            }
            self.exact &= current.is_exact();
        }

        self.finalize(kind, current, last_exact);
        Ok(Completion::Finished(self.best.clone()))
    }

    fn finalize(&mut self, kind: CompilationType, terminal: Layer<C::State>, last_exact: Option<Vec<Node<C::State>>>) {
        self.best   = terminal.best().cloned();
        self.status = Status::Done;

        if kind == CompilationType::Relaxed {
            self.exact_cut = match self.cutset_type {
                CutsetType::Frontier => {
                    for mut node in terminal.into_nodes() {
                        if node.is_exact() {
                            self.cutset.push_terminal(node);
                        } else {
                            self.cutset.record(node.take_exact_parents());
                        }
                    }
                    self.cutset.drain()
                },
                CutsetType::LastExactLayer => {
                    if self.exact {
                        terminal.into_nodes()
                    } else {
                        last_exact.unwrap_or_default()
                    }
                }
            };
            for node in self.exact_cut.iter_mut() {
                node.clear_exact_parents();
            }
            // an empty terminal layer proves there is no solution at all
            if self.best.is_none() {
                self.exact_cut.clear();
            }
        }

        debug!("{:?} diagram done: best {:?}, exact {}, cutset of {} nodes",
               kind, self.best.as_ref().map(Node::value), self.exact, self.exact_cut.len());
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
