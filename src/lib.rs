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

//! # DDBNB
//! DDBNB is a generic branch-and-bound engine to solve discrete maximization
//! problems with approximate decision diagrams. Its goal is to let you
//! describe your optimization problem as a dynamic program (see `Problem`)
//! along with a `Relaxation`. When the dynamic program of the problem is
//! considered as a transition system, the relaxation serves the purpose of
//! merging different nodes of the transition system into an other node
//! standing for them all. In that setup, the sole condition to ensure the
//! correctness of the optimization algorithm is that the replacement node must
//! be an over approximation of all what is feasible from the merged nodes.
//!
//! ## Quick Example
//! The following presents a minimalistic use of the library. It implements a
//! solver for the (bounded) knapsack problem. This example is shown for
//! illustration purpose because it is pretty simple and chances are high
//! anybody is already comfortable with the problem definition.
//!
//! #### Describe the problem as dynamic program
//! The first thing to do in this example is to describe the knapsack problem
//! in terms of a dynamic program. Here, the state of a node, is nothing more
//! than the remaining capacity of our sack. The rank of a node is used to
//! decide which nodes are the most promising: here we simply use the value
//! accumulated so far.
//! ```
//! # use ddbnb::*;
//! #
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct Capacity(usize);
//! impl StateRepresentation for Capacity {
//!     fn rank(&self, node: &Node<Self>) -> isize {
//!         node.value()
//!     }
//! }
//!
//! struct Knapsack {
//!     capacity: usize,
//!     profit  : Vec<usize>,
//!     weight  : Vec<usize>,
//! }
//! impl Problem for Knapsack {
//!     type State = Capacity;
//!
//!     fn nb_vars(&self) -> usize {
//!         self.profit.len()
//!     }
//!     fn initial_state(&self) -> Capacity {
//!         Capacity(self.capacity)
//!     }
//!     fn initial_value(&self) -> isize {
//!         0
//!     }
//!     // each item can be taken as many times as it fits in the empty sack
//!     fn variables(&self) -> Result<Vec<Variable>, Error> {
//!         self.weight.iter().enumerate()
//!             .map(|(i, w)| Variable::new(i, self.capacity / w + 1))
//!             .collect()
//!     }
//!     fn successors(&self, node: &Node<Capacity>, var: usize) -> Result<Vec<Node<Capacity>>, Error> {
//!         let free = node.state().0;
//!         let (w, p) = (self.weight[var], self.profit[var]);
//!         (0..=free / w)
//!             .map(|n| node.successor(
//!                 Capacity(free - n * w),
//!                 node.value() + (n * p) as isize,
//!                 var,
//!                 n as isize))
//!             .collect()
//!     }
//! }
//! ```
//!
//! #### Provide a relaxation for the problem
//! The relaxation we will define is probably the simplest you can think of.
//! When one needs to define a new state to replace those exceeding the maximum
//! width of the diagram, we will simply keep the state with the maximum
//! capacity as it enables at least all the possible states that will be
//! merged. Its value is the best of the values of the merged nodes.
//! ```
//! # use ddbnb::*;
//! # #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! # struct Capacity(usize);
//! #
//! struct KPRelax;
//! impl Relaxation for KPRelax {
//!     type State = Capacity;
//!
//!     fn merge(&self, nodes: &[Node<Capacity>]) -> Node<Capacity> {
//!         let capacity = nodes.iter().map(|n| n.state().0).max().unwrap_or(0);
//!         let value    = nodes.iter().map(|n| n.value()).max().unwrap_or(isize::MIN);
//!         nodes[0].approximate(Capacity(capacity), value)
//!     }
//! }
//! # impl StateRepresentation for Capacity {
//! #     fn rank(&self, node: &Node<Self>) -> isize { node.value() }
//! # }
//! ```
//!
//! #### Solve the problem
//! ```
//! # use ddbnb::*;
//! # #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! # struct Capacity(usize);
//! # impl StateRepresentation for Capacity {
//! #     fn rank(&self, node: &Node<Self>) -> isize { node.value() }
//! # }
//! # struct Knapsack { capacity: usize, profit: Vec<usize>, weight: Vec<usize> }
//! # impl Problem for Knapsack {
//! #     type State = Capacity;
//! #     fn nb_vars(&self) -> usize { self.profit.len() }
//! #     fn initial_state(&self) -> Capacity { Capacity(self.capacity) }
//! #     fn initial_value(&self) -> isize { 0 }
//! #     fn variables(&self) -> Result<Vec<Variable>, Error> {
//! #         self.weight.iter().enumerate()
//! #             .map(|(i, w)| Variable::new(i, self.capacity / w + 1))
//! #             .collect()
//! #     }
//! #     fn successors(&self, node: &Node<Capacity>, var: usize) -> Result<Vec<Node<Capacity>>, Error> {
//! #         let free = node.state().0;
//! #         let (w, p) = (self.weight[var], self.profit[var]);
//! #         (0..=free / w)
//! #             .map(|n| node.successor(Capacity(free - n * w), node.value() + (n * p) as isize, var, n as isize))
//! #             .collect()
//! #     }
//! # }
//! # struct KPRelax;
//! # impl Relaxation for KPRelax {
//! #     type State = Capacity;
//! #     fn merge(&self, nodes: &[Node<Capacity>]) -> Node<Capacity> {
//! #         let capacity = nodes.iter().map(|n| n.state().0).max().unwrap_or(0);
//! #         let value    = nodes.iter().map(|n| n.value()).max().unwrap_or(isize::MIN);
//! #         nodes[0].approximate(Capacity(capacity), value)
//! #     }
//! # }
//! // 1. Create an instance of our knapsack problem
//! let problem = Knapsack {
//!     capacity: 7,
//!     profit  : vec![7, 2, 5],
//!     weight  : vec![4, 2, 3]
//! };
//!
//! // 2. Build a decision diagram for our problem using the relaxation we
//! //    defined and the default heuristics.
//! let mdd = mdd_builder(&problem, KPRelax).into_diagram();
//!
//! // 3. Create a solver that will use that diagram to solve the problem,
//! //    with layers holding at most 2 nodes.
//! let config = SolverConfigBuilder::default().width(2).build().unwrap();
//! let mut solver = SequentialSolver::customized(mdd, config);
//!
//! // 4. Maximize your objective function
//! let best = solver.solve().unwrap();
//! assert!(solver.is_exact());
//! assert_eq!(Some(12), best.map(|n| n.value()));
//!
//! // 5. Retrieve the decisions leading to the best solution
//! let solution = solver.best_solution().unwrap();
//! assert_eq!(Decision { variable: 0, value: 1 }, solution[0]);
//! assert_eq!(Decision { variable: 2, value: 1 }, solution[2]);
//! ```
//!
//! ## Logging
//! The library reports its progress through the `log` facade: the merge and
//! delete operations are traced, every diagram build and every hundredth
//! explored node are reported at the debug level, and the outcome of a
//! resolution is reported at the info level. It is up to the binary using
//! this library to install a logger.

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;

#[cfg(test)]
mod test_utils;
