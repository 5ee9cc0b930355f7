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

//! This module provides the implementation of a sequential branch and bound
//! solver. That is a solver that will solve the problem on one single thread.

use std::time::{Duration, Instant};

use binary_heap_plus::BinaryHeap;
use log::{debug, info};

use crate::abstraction::{Completion, Config, Solver};
use crate::common::Error;
use crate::implementation::heuristics::MaxRank;
use crate::implementation::Node;
use crate::implementation::mdd::Diagram;
use crate::implementation::solver::SolverConfig;

/// This is the structure implementing a single-threaded branch and bound
/// solver. It repeatedly pops the most promising node from its open list,
/// compiles a restricted diagram rooted in that node (to find good solutions)
/// and, unless that restricted diagram was exact, a relaxed one (to bound the
/// value of the subproblem and to enumerate its exact cutset).
///
/// # Example Usage
/// ```
/// # use ddbnb::*;
/// #
/// # #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// # struct Sum(isize);
/// # impl StateRepresentation for Sum {
/// #     fn rank(&self, node: &Node<Self>) -> isize { node.value() }
/// # }
/// # struct Digits;
/// # impl Problem for Digits {
/// #     type State = Sum;
/// #     fn nb_vars(&self) -> usize { 4 }
/// #     fn initial_state(&self) -> Sum { Sum(0) }
/// #     fn initial_value(&self) -> isize { 0 }
/// #     fn variables(&self) -> Result<Vec<Variable>, Error> {
/// #         (0..4).map(|i| Variable::new(i, 10)).collect()
/// #     }
/// #     // the digits must sum up to at most 12
/// #     fn successors(&self, n: &Node<Sum>, var: usize) -> Result<Vec<Node<Sum>>, Error> {
/// #         (0..10).filter(|d| n.state().0 + d <= 12)
/// #             .map(|d| n.successor(Sum(n.state().0 + d), n.value() + d * (var as isize + 1), var, d))
/// #             .collect()
/// #     }
/// # }
/// # struct DigitsRelax;
/// # impl Relaxation for DigitsRelax {
/// #     type State = Sum;
/// #     fn merge(&self, nodes: &[Node<Sum>]) -> Node<Sum> {
/// #         let sum = nodes.iter().map(|n| n.state().0).min().unwrap_or(0);
/// #         let val = nodes.iter().map(|n| n.value()).max().unwrap_or(0);
/// #         nodes[0].approximate(Sum(sum), val)
/// #     }
/// # }
/// let problem    = Digits;
/// let mdd        = mdd_builder(&problem, DigitsRelax).into_diagram();
/// // the solver is created using a diagram.
/// let mut solver = SequentialSolver::new(mdd);
/// solver.set_width(3);
/// // the best node (if one exists) is returned, and `is_exact` tells whether
/// // it was proven optimal. An unsatisfiable problem would yield `None`
/// // while `is_exact()` is true.
/// let best = solver.solve().unwrap();
/// assert!(solver.is_exact());
/// assert_eq!(Some(45), best.map(|n| n.value()));
/// // The best solution (if one exist) is retrieved with
/// let solution = solver.best_solution().unwrap();
/// assert_eq!(4, solution.len());
/// ```
pub struct SequentialSolver<C: Config> {
    mdd      : Diagram<C>,
    config   : SolverConfig,
    fringe   : BinaryHeap<Node<C::State>, MaxRank>,
    best_node: Option<Node<C::State>>,
    best_lb  : isize,
    explored : usize,
    is_exact : bool,
}

impl <C: Config> SequentialSolver<C> {
    /// Creates a solver with the default configuration (see `SolverConfig`).
    pub fn new(mdd: Diagram<C>) -> Self {
        Self::customized(mdd, SolverConfig::default())
    }
    /// Creates a solver using the given configuration.
    pub fn customized(mdd: Diagram<C>, config: SolverConfig) -> Self {
        SequentialSolver {
            mdd,
            config,
            fringe   : BinaryHeap::from_vec_cmp(vec![], MaxRank),
            best_node: None,
            best_lb  : isize::MIN,
            explored : 0,
            is_exact : false,
        }
    }
    /// The configuration of this solver
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
    /// Returns the number of nodes which have been popped from the open list
    /// and explored (i.e. not pruned) during the last resolution.
    pub fn explored(&self) -> usize {
        self.explored
    }

    fn maybe_update_best(&mut self, candidate: Option<Node<C::State>>) {
        if let Some(node) = candidate {
            if node.value() > self.best_lb {
                self.best_lb   = node.value();
                self.best_node = Some(node);
            }
        }
    }

    fn reset(&mut self) {
        self.fringe.clear();
        self.best_node = None;
        self.best_lb   = isize::MIN;
        self.explored  = 0;
        self.is_exact  = false;
    }

    fn maximize(&mut self, deadline: Option<Instant>) -> Result<Option<Node<C::State>>, Error> {
        self.reset();
        self.mdd.set_cutset_type(self.config.cutset_type);

        let nb_vars = self.mdd.config().nb_vars();
        let root    = self.mdd.config().root_node()?;
        self.fringe.push(root);

        while let Some(node) = self.fringe.pop() {
            // skip if this node cannot improve the current best solution
            if node.relaxed_value() <= self.best_lb {
                continue;
            }

            self.explored += 1;
            if self.explored % 100 == 0 {
                debug!("explored {}, lb {}, ub {}, fringe sz {}",
                       self.explored, self.best_lb, node.relaxed_value(), self.fringe.len());
            }

            let width = self.config.width.min(nb_vars.saturating_sub(node.layer())).max(1);

            // 1. RESTRICTION
            self.mdd.set_initial_state(node.clone());
            match self.mdd.solve_restricted(width, deadline)? {
                Completion::TimedOut         => return Ok(self.timed_out()),
                Completion::Finished(best)   => self.maybe_update_best(best),
            }
            if self.mdd.is_exact() {
                continue;
            }

            // 2. RELAXATION
            self.mdd.set_initial_state(node);
            let ub = match self.mdd.solve_relaxed(width, deadline)? {
                Completion::TimedOut         => return Ok(self.timed_out()),
                Completion::Finished(None)   => continue,
                Completion::Finished(Some(best)) => {
                    if self.mdd.is_exact() {
                        self.maybe_update_best(Some(best));
                        continue;
                    }
                    best.value()
                }
            };
            if ub > self.best_lb {
                for mut cutset_node in self.mdd.take_exact_cutset() {
                    cutset_node.set_relaxed_value(ub);
                    self.fringe.push(cutset_node);
                }
            }
        }

        self.is_exact = true;
        info!("optimum {:?}, explored {}", self.best_value(), self.explored);
        Ok(self.best_node.clone())
    }

    fn timed_out(&mut self) -> Option<Node<C::State>> {
        self.is_exact = false;
        info!("timeout: best {:?}, explored {}, fringe sz {}",
              self.best_value(), self.explored, self.fringe.len());
        self.best_node.clone()
    }
}

/// The instant at which a time budget of `timeout` starting now elapses. A
/// budget reaching beyond what `Instant` can represent means no deadline.
fn deadline_after(timeout: Duration) -> Option<Instant> {
    Instant::now().checked_add(timeout)
}

impl <C: Config> Solver for SequentialSolver<C> {
    type State = C::State;

    fn solve(&mut self) -> Result<Option<Node<C::State>>, Error> {
        let deadline = self.config.timeout.and_then(deadline_after);
        self.maximize(deadline)
    }
    fn solve_with_timeout(&mut self, timeout: Duration) -> Result<Option<Node<C::State>>, Error> {
        self.maximize(deadline_after(timeout))
    }
    fn set_width(&mut self, width: usize) {
        self.config.width = width;
    }

    fn is_exact(&self) -> bool {
        self.is_exact
    }
    fn best_node(&self) -> Option<&Node<C::State>> {
        self.best_node.as_ref()
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

/// Unlike the rest of the library, the solvers modules are not tested in depth
/// with unit tests. So we basically unit test the configuration capabilities
/// of the solver and then resort to the solving of instances with known
/// optimum to validate the behavior of the solve function (see tests/).
