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

//! This module defines the `Solver` trait.

use std::time::Duration;

use crate::common::{Decision, Error};
use crate::implementation::Node;

/// The solver trait lets you maximize an objective function.
pub trait Solver {
    /// The type of the states of the problem being solved
    type State;

    /// Maximizes the objective function (without any time limit other than
    /// the one that may have been configured) and returns the best node that
    /// was found. Four cases are to be distinguished:
    ///
    /// * When `is_exact()` is true and a node is returned: the node's value
    ///   is the maximum value of the objective function.
    /// * When `is_exact()` is false and a node is returned, it is the best
    ///   solution that was known when the time budget elapsed.
    /// * When `is_exact()` is true and no node is returned: the problem admits
    ///   no feasible solution.
    /// * When `is_exact()` is false and no node is returned: no feasible
    ///   solution was found before the time budget elapsed.
    fn solve(&mut self) -> Result<Option<Node<Self::State>>, Error>;
    /// Same as `solve()` but stops searching once `timeout` has elapsed.
    fn solve_with_timeout(&mut self, timeout: Duration) -> Result<Option<Node<Self::State>>, Error>;
    /// Sets the maximum width of the restricted and relaxed diagrams.
    fn set_width(&mut self, width: usize);

    /// Returns true iff the last resolution explored the complete search
    /// space (hence proving the optimality of the best solution).
    fn is_exact(&self) -> bool;
    /// Returns the best node that has been identified for this problem.
    fn best_node(&self) -> Option<&Node<Self::State>>;
    /// Returns the value of the best solution that has been identified for
    /// this problem.
    fn best_value(&self) -> Option<isize> {
        self.best_node().map(|n| n.value())
    }
    /// Returns the best solution that has been identified for this problem.
    fn best_solution(&self) -> Option<Vec<Decision>> {
        self.best_node().map(|n| n.solution())
    }
}
