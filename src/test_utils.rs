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

//! This module provides some utilities to write unit tests, the most notable
//! of which is a small (bounded) knapsack model and its relaxation.
#![cfg(test)]

use crate::abstraction::{Problem, Relaxation, StateRepresentation};
use crate::common::{Decision, Error, Variable};
use crate::implementation::Node;

/// The state of a knapsack node is its remaining capacity. The most
/// promising nodes are those having accumulated the largest profit.
impl StateRepresentation for usize {
    fn rank(&self, node: &Node<Self>) -> isize {
        node.value()
    }
}

/// Describe the knapsack problem in terms of a dynamic program. Each item can
/// be taken several times as long as it fits in the sack.
#[derive(Debug, Clone)]
pub struct Knapsack {
    pub capacity: usize,
    pub weight  : Vec<usize>,
    pub profit  : Vec<usize>,
}
impl Knapsack {
    pub fn new(capacity: usize, weight: Vec<usize>, profit: Vec<usize>) -> Self {
        Knapsack { capacity, weight, profit }
    }
    /// Returns the total profit of the given solution.
    pub fn evaluate(&self, solution: &[Decision]) -> isize {
        solution.iter()
            .map(|d| d.value * self.profit[d.variable] as isize)
            .sum()
    }
}
impl Problem for Knapsack {
    type State = usize;

    fn nb_vars(&self) -> usize {
        self.weight.len()
    }
    fn initial_state(&self) -> usize {
        self.capacity
    }
    fn initial_value(&self) -> isize {
        0
    }
    fn variables(&self) -> Result<Vec<Variable>, Error> {
        self.weight.iter().enumerate()
            .map(|(i, w)| Variable::new(i, self.capacity.checked_div(*w).map_or(0, |n| n + 1)))
            .collect()
    }
    fn successors(&self, node: &Node<usize>, var: usize) -> Result<Vec<Node<usize>>, Error> {
        let variable = node.variable(var).ok_or(Error::UnknownVariable(var))?;
        let capacity = *node.state();
        let weight   = self.weight[var];
        let profit   = self.profit[var] as isize;

        variable.values()
            .filter(|n| *n as usize * weight <= capacity)
            .map(|n| node.successor(capacity - n as usize * weight, node.value() + n * profit, var, n))
            .collect()
    }
}

/// Merge the nodes by creating a new fake node that has the maximum remaining
/// capacity and the maximum profit of the merged nodes.
#[derive(Debug, Clone, Copy)]
pub struct KnapsackRelax;
impl Relaxation for KnapsackRelax {
    type State = usize;

    fn merge(&self, nodes: &[Node<usize>]) -> Node<usize> {
        let capacity = nodes.iter().map(|n| *n.state()).max().unwrap();
        let value    = nodes.iter().map(|n| n.value()).max().unwrap();
        nodes[0].approximate(capacity, value)
    }
}

/// Enumerates all the feasible solutions of the knapsack and returns the
/// best profit.
pub fn brute_force(pb: &Knapsack) -> isize {
    fn explore(pb: &Knapsack, item: usize, capacity: usize) -> isize {
        if item == pb.weight.len() {
            return 0;
        }
        let w = pb.weight[item];
        let p = pb.profit[item] as isize;
        (0..)
            .take_while(|n| n * w <= capacity)
            .map(|n| n as isize * p + explore(pb, item + 1, capacity - n * w))
            .max()
            .unwrap_or(0)
    }
    explore(pb, 0, pb.capacity)
}
