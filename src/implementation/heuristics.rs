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

//! This module provides an implementation for the usual solver heuristics
//! (variable ordering, merge and delete selection, open list ordering)

use std::cmp::Ordering;

use compare::Compare;

use crate::abstraction::{DeleteSelector, MergeSelector, StateRepresentation, VariableSelector};
use crate::common::Variable;
use crate::implementation::Node;
use crate::implementation::mdd::Layer;

// ----------------------------------------------------------------------------
// --- VARIABLE SELECTION -----------------------------------------------------
// ----------------------------------------------------------------------------

/// This strategy branches on the variables in their ''natural'' order. That is,
/// it will first pick the variable having the smallest identifier among the
/// free ones, then the next one and so on.
///
/// # Example
/// ```
/// # use ddbnb::*;
/// let layer = Layer::<usize>::new(0);
/// let free  = vec![Variable::new(4, 2).unwrap(), Variable::new(1, 2).unwrap()];
/// assert_eq!(Some(1), NaturalOrder.select(&free, &layer));
/// assert_eq!(None,    NaturalOrder.select(&[], &layer));
/// ```
#[derive(Default, Debug, Clone, Copy)]
pub struct NaturalOrder;
impl <S> VariableSelector<S> for NaturalOrder {
    fn select(&self, free: &[Variable], _: &Layer<S>) -> Option<usize> {
        free.iter().map(Variable::id).min()
    }
}

/// This strategy selects the variables in decreasing order of their
/// identifiers.
///
/// # Example
/// ```
/// # use ddbnb::*;
/// let layer = Layer::<usize>::new(0);
/// let free  = vec![Variable::new(4, 2).unwrap(), Variable::new(1, 2).unwrap()];
/// assert_eq!(Some(4), Decreasing.select(&free, &layer));
/// ```
#[derive(Default, Debug, Clone, Copy)]
pub struct Decreasing;
impl <S> VariableSelector<S> for Decreasing {
    fn select(&self, free: &[Variable], _: &Layer<S>) -> Option<usize> {
        free.iter().map(Variable::id).max()
    }
}

// ----------------------------------------------------------------------------
// --- NODES SELECTION --------------------------------------------------------
// ----------------------------------------------------------------------------

/// Returns the positions of the `k` nodes of the layer which come first when
/// the nodes are sorted by increasing `key`.
fn lowest_k<S, K, F>(layer: &Layer<S>, k: usize, key: F) -> Vec<usize>
    where K: Ord,
          F: Fn(&Node<S>) -> K
{
    let nodes = layer.nodes();
    let mut positions = (0..nodes.len()).collect::<Vec<usize>>();
    positions.sort_by_key(|i| key(&nodes[*i]));
    positions.truncate(k);
    positions
}

/// This strategy picks the nodes having the lowest rank (ties are broken by
/// value) as victims when a layer must be merged or restricted. Hence, the
/// most promising nodes are kept intact.
#[derive(Default, Debug, Clone, Copy)]
pub struct MinRank;
impl <S: StateRepresentation> MergeSelector<S> for MinRank {
    fn select(&self, layer: &Layer<S>, k: usize) -> Vec<usize> {
        lowest_k(layer, k, |n| (n.rank(), n.value()))
    }
}
impl <S: StateRepresentation> DeleteSelector<S> for MinRank {
    fn select(&self, layer: &Layer<S>, k: usize) -> Vec<usize> {
        lowest_k(layer, k, |n| (n.rank(), n.value()))
    }
}

/// This strategy picks the nodes having the lowest accumulated value as
/// victims when a layer must be merged or restricted.
#[derive(Default, Debug, Clone, Copy)]
pub struct MinValue;
impl <S> MergeSelector<S> for MinValue {
    fn select(&self, layer: &Layer<S>, k: usize) -> Vec<usize> {
        lowest_k(layer, k, Node::value)
    }
}
impl <S> DeleteSelector<S> for MinValue {
    fn select(&self, layer: &Layer<S>, k: usize) -> Vec<usize> {
        lowest_k(layer, k, Node::value)
    }
}

/// This is the default ordering of the solver open list: the node having the
/// greatest rank is explored first. Among nodes of equal rank, the one with
/// the loosest upper bound goes first.
#[derive(Default, Debug, Clone, Copy)]
pub struct MaxRank;
impl <S: StateRepresentation> Compare<Node<S>> for MaxRank {
    fn compare(&self, a: &Node<S>, b: &Node<S>) -> Ordering {
        a.rank().cmp(&b.rank())
            .then_with(|| a.relaxed_value().cmp(&b.relaxed_value()))
    }
}

// ----------------------------------------------------------------------------
// --- CLOSURES ---------------------------------------------------------------
// ----------------------------------------------------------------------------

/// This structure provides a simple way to turn a closure into any of the
/// heuristics traits. Whether the closure becomes a variable selector or a
/// nodes selector depends on its signature.
///
/// # Example
/// ```
/// # use ddbnb::*;
/// let layer  = Layer::<usize>::new(0);
/// let free   = vec![Variable::new(0, 2).unwrap(), Variable::new(1, 2).unwrap()];
/// let second = Func(|free: &[Variable], _: &Layer<usize>| free.get(1).map(Variable::id));
/// assert_eq!(Some(1), VariableSelector::select(&second, &free, &layer));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Func<F>(pub F);

impl <S, F> VariableSelector<S> for Func<F>
    where F: Fn(&[Variable], &Layer<S>) -> Option<usize>
{
    fn select(&self, free: &[Variable], layer: &Layer<S>) -> Option<usize> {
        (self.0)(free, layer)
    }
}
impl <S, F> MergeSelector<S> for Func<F>
    where F: Fn(&Layer<S>, usize) -> Vec<usize>
{
    fn select(&self, layer: &Layer<S>, k: usize) -> Vec<usize> {
        (self.0)(layer, k)
    }
}
impl <S, F> DeleteSelector<S> for Func<F>
    where F: Fn(&Layer<S>, usize) -> Vec<usize>
{
    fn select(&self, layer: &Layer<S>, k: usize) -> Vec<usize> {
        (self.0)(layer, k)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
