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

//! This module provides the builder which is used to assemble the
//! configuration of a decision diagram, along with the configuration itself.

use crate::abstraction::{Config, DeleteSelector, MergeSelector, Problem, Relaxation, VariableSelector};
use crate::common::{Error, Variable};
use crate::implementation::heuristics::{MinRank, NaturalOrder};
use crate::implementation::Node;
use crate::implementation::mdd::{Diagram, Layer};

/// This is the function you should use to instanciate a new decision diagram
/// configuration. It yields a builder for the configuration of your diagram.
/// The builder only needs a reference to the problem at hand and a
/// relaxation. All the heuristics default to sensible values and can be
/// customized with the `with_*` methods.
///
/// # Example
/// ```
/// # use ddbnb::*;
/// # #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// # struct Count(isize);
/// # impl StateRepresentation for Count {
/// #     fn rank(&self, node: &Node<Self>) -> isize { node.value() }
/// # }
/// # struct Coins;
/// # impl Problem for Coins {
/// #     type State = Count;
/// #     fn nb_vars(&self) -> usize { 3 }
/// #     fn initial_state(&self) -> Count { Count(0) }
/// #     fn initial_value(&self) -> isize { 0 }
/// #     fn variables(&self) -> Result<Vec<Variable>, Error> {
/// #         (0..3).map(|i| Variable::new(i, 2)).collect()
/// #     }
/// #     fn successors(&self, n: &Node<Count>, var: usize) -> Result<Vec<Node<Count>>, Error> {
/// #         (0..2).map(|v| n.successor(Count(n.state().0 + v), n.value() + v, var, v)).collect()
/// #     }
/// # }
/// # struct CoinsRelax;
/// # impl Relaxation for CoinsRelax {
/// #     type State = Count;
/// #     fn merge(&self, nodes: &[Node<Count>]) -> Node<Count> {
/// #         let best = nodes.iter().map(|n| n.value()).max().unwrap_or(0);
/// #         nodes[0].approximate(Count(best), best)
/// #     }
/// # }
/// let problem = Coins;
/// let mut mdd = mdd_builder(&problem, CoinsRelax)
///     .with_variable_selector(Decreasing)
///     .with_merge_selector(MinValue)
///     .into_diagram();
///
/// let best = mdd.solve_relaxed(2, None).unwrap();
/// assert_eq!(Some(3), best.best_value());
/// ```
pub fn mdd_builder<P, R>(problem: &P, relaxation: R) -> MDDBuilder<P, R>
    where P: Problem,
          R: Relaxation<State=P::State>
{
    MDDBuilder {
        problem,
        relaxation,
        vs: NaturalOrder,
        ms: MinRank,
        ds: MinRank,
    }
}

/// The builder of a decision diagram configuration (see `mdd_builder`).
pub struct MDDBuilder<'a, P, R, VS = NaturalOrder, MS = MinRank, DS = MinRank> {
    problem   : &'a P,
    relaxation: R,
    vs        : VS,
    ms        : MS,
    ds        : DS,
}

impl <'a, P, R, VS, MS, DS> MDDBuilder<'a, P, R, VS, MS, DS>
    where P : Problem,
          R : Relaxation<State=P::State>,
          VS: VariableSelector<P::State>,
          MS: MergeSelector<P::State>,
          DS: DeleteSelector<P::State>
{
    /// Sets the heuristic used to pick the variable to branch on.
    pub fn with_variable_selector<H>(self, vs: H) -> MDDBuilder<'a, P, R, H, MS, DS>
        where H: VariableSelector<P::State>
    {
        MDDBuilder {
            problem   : self.problem,
            relaxation: self.relaxation,
            vs,
            ms        : self.ms,
            ds        : self.ds,
        }
    }
    /// Sets the heuristic used to pick the nodes to merge.
    pub fn with_merge_selector<H>(self, ms: H) -> MDDBuilder<'a, P, R, VS, H, DS>
        where H: MergeSelector<P::State>
    {
        MDDBuilder {
            problem   : self.problem,
            relaxation: self.relaxation,
            vs        : self.vs,
            ms,
            ds        : self.ds,
        }
    }
    /// Sets the heuristic used to pick the nodes to delete.
    pub fn with_delete_selector<H>(self, ds: H) -> MDDBuilder<'a, P, R, VS, MS, H>
        where H: DeleteSelector<P::State>
    {
        MDDBuilder {
            problem   : self.problem,
            relaxation: self.relaxation,
            vs        : self.vs,
            ms        : self.ms,
            ds,
        }
    }
    /// Yields the configuration described by this builder.
    pub fn config(self) -> MDDConfig<'a, P, R, VS, MS, DS> {
        MDDConfig {
            problem   : self.problem,
            relaxation: self.relaxation,
            vs        : self.vs,
            ms        : self.ms,
            ds        : self.ds,
        }
    }
    /// Yields a decision diagram using the configuration described by this
    /// builder.
    pub fn into_diagram(self) -> Diagram<MDDConfig<'a, P, R, VS, MS, DS>> {
        Diagram::new(self.config())
    }
}

/// The configuration of a decision diagram: it bundles the problem, its
/// relaxation and the heuristics driving the development of the diagram.
pub struct MDDConfig<'a, P, R, VS, MS, DS> {
    problem   : &'a P,
    relaxation: R,
    vs        : VS,
    ms        : MS,
    ds        : DS,
}

impl <'a, P, R, VS, MS, DS> Config for MDDConfig<'a, P, R, VS, MS, DS>
    where P : Problem,
          R : Relaxation<State=P::State>,
          VS: VariableSelector<P::State>,
          MS: MergeSelector<P::State>,
          DS: DeleteSelector<P::State>
{
    type State = P::State;

    fn nb_vars(&self) -> usize {
        self.problem.nb_vars()
    }
    fn root_node(&self) -> Result<Node<P::State>, Error> {
        self.problem.root_node()
    }
    fn successors(&self, node: &Node<P::State>, var: usize) -> Result<Vec<Node<P::State>>, Error> {
        self.problem.successors(node, var)
    }

    fn merge(&self, nodes: &[Node<P::State>]) -> Node<P::State> {
        self.relaxation.merge(nodes)
    }

    fn select_var(&self, free: &[Variable], layer: &Layer<P::State>) -> Option<usize> {
        self.vs.select(free, layer)
    }
    fn select_merge(&self, layer: &Layer<P::State>, k: usize) -> Vec<usize> {
        self.ms.select(layer, k)
    }
    fn select_delete(&self, layer: &Layer<P::State>, k: usize) -> Vec<usize> {
        self.ds.select(layer, k)
    }
}
