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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client library is likely to work with.
//!
//! In particular, this module comprises the definition of the following types:
//! - `Variable` (+ associated `Domain` and `DomainIter`)
//! - `Decision`
//! - `Error`

use std::ops::RangeInclusive;
use std::sync::Arc;

use thiserror::Error;

// ----------------------------------------------------------------------------
// --- ERRORS -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// All the errors that can possibly be raised while developing a decision
/// diagram or while solving a problem. Each of them denotes a violation of the
/// contract between the engine and one of its collaborators (a `Problem` that
/// asks to bind an infeasible value, a selection heuristic that answers with
/// a bogus selection, ...). These are never expected during correct operation
/// and they are never swallowed: they are propagated up to the caller of the
/// solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Attempted to create a variable whose domain holds no value at all.
    #[error("the domain of variable {id} is empty")]
    EmptyDomain { id: usize },
    /// Attempted to create a variable holding more values than an `isize` can
    /// enumerate.
    #[error("the domain of variable {id} is too large ({size} values)")]
    DomainTooLarge { id: usize, size: usize },
    /// Attempted to bind a variable to a value which is not in its domain.
    #[error("value {value} is not in the domain of variable {id}")]
    ValueNotInDomain { id: usize, value: isize },
    /// Attempted to bind a variable that had already been bound.
    #[error("variable {id} is already bound to {value}")]
    AlreadyBound { id: usize, value: isize },
    /// A variable identifier does not denote any variable of the node.
    #[error("there is no variable with id {0}")]
    UnknownVariable(usize),
    /// Two variables of the same node share the same identifier.
    #[error("variable {0} appears more than once")]
    DuplicateVariable(usize),
    /// A merge or delete heuristic did not select exactly `expected` distinct
    /// nodes among the `available` ones.
    #[error("expected a selection of {expected} distinct nodes out of {available}")]
    InvalidSelection { expected: usize, available: usize },
}

// ----------------------------------------------------------------------------
// --- DOMAIN -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A domain is the set of values (isize) that may be assigned to some variable.
///
/// # Technical note
/// Once a variable is bound, its original set of values is of no use anymore.
/// This is why the `Bound` variant only remembers the value which was assigned
/// to the variable. Explicit sets of values are shared (`Arc`) among all the
/// copies of a variable since these are copied whenever a node forks into its
/// successors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Domain {
    /// All values in the inclusive range `min..=max`
    Interval { min: isize, max: isize },
    /// An explicit set of values (sorted, without duplicates)
    Set(Arc<[isize]>),
    /// The single value a variable has been bound to
    Bound(isize),
}
impl Domain {
    /// Returns the number of values in this domain. This saturates at
    /// `usize::MAX` for the interval spanning all of `isize`.
    pub fn len(&self) -> usize {
        match self {
            Domain::Interval { min, max } => max.abs_diff(*min).saturating_add(1),
            Domain::Set(values)           => values.len(),
            Domain::Bound(_)              => 1,
        }
    }
    /// Returns true iff the domain holds no value. A well formed domain is
    /// never empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns true iff `value` belongs to this domain.
    pub fn contains(&self, value: isize) -> bool {
        match self {
            Domain::Interval { min, max } => *min <= value && value <= *max,
            Domain::Set(values)           => values.binary_search(&value).is_ok(),
            Domain::Bound(v)              => *v == value,
        }
    }
    /// Returns an iterator over the values of this domain (in increasing order).
    pub fn iter(&self) -> DomainIter<'_> {
        match self {
            Domain::Interval { min, max } => DomainIter::Interval(*min..=*max),
            Domain::Set(values)           => DomainIter::Set(values.iter()),
            Domain::Bound(v)              => DomainIter::Bound(Some(*v)),
        }
    }
}
impl <'a> IntoIterator for &'a Domain {
    type Item     = isize;
    type IntoIter = DomainIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `DomainIter` is the type of the iterator used to go over the possible values
/// of a domain. Therefore, it is isomorphic to the `Domain` type itself.
pub enum DomainIter<'a> {
    Interval (RangeInclusive<isize>),
    Set      (std::slice::Iter<'a, isize>),
    Bound    (Option<isize>),
}
impl Iterator for DomainIter<'_> {
    type Item = isize;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            DomainIter::Interval (i) => i.next(),
            DomainIter::Set      (i) => i.next().copied(),
            DomainIter::Bound    (v) => v.take(),
        }
    }
}

// ----------------------------------------------------------------------------
// --- VARIABLE ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes a finite domain integer decision variable of the problem
/// at hand. Each variable is assumed to be identified with an integer ranging
/// from 0 until `problem.nb_vars()`.
///
/// A variable is either *free* (its domain holds all the candidate values) or
/// *bound* (it has been assigned one single value). Variables are never
/// mutated across nodes: they are copied whenever a node forks into its
/// successors and become permanently bound in a successor node.
///
/// # Example
/// ```
/// # use ddbnb::*;
/// let mut x = Variable::new(0, 10).unwrap();
/// assert_eq!(10, x.len());
/// assert!(!x.is_bound());
///
/// assert!(x.assign(2).is_ok());
/// assert_eq!(Some(2), x.value());
/// assert_eq!(Err(Error::AlreadyBound{id: 0, value: 2}), x.assign(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    id    : usize,
    domain: Domain,
}
impl Variable {
    /// Creates a variable whose domain is `[0, n)`.
    pub fn new(id: usize, n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::EmptyDomain { id });
        }
        let max = isize::try_from(n - 1).map_err(|_| Error::DomainTooLarge { id, size: n })?;
        Self::new_range(id, 0, max)
    }
    /// Creates a variable whose domain is `[min, max]`.
    pub fn new_range(id: usize, min: isize, max: isize) -> Result<Self, Error> {
        if min > max {
            Err(Error::EmptyDomain { id })
        } else {
            Ok(Variable { id, domain: Domain::Interval { min, max } })
        }
    }
    /// Creates a variable whose domain is the given set of `values`.
    pub fn from_set<I>(id: usize, values: I) -> Result<Self, Error>
        where I: IntoIterator<Item=isize>
    {
        let mut values = values.into_iter().collect::<Vec<isize>>();
        values.sort_unstable();
        values.dedup();

        if values.is_empty() {
            Err(Error::EmptyDomain { id })
        } else {
            Ok(Variable { id, domain: Domain::Set(values.into()) })
        }
    }
    #[inline]
    /// This function returns the id (numeric value) of the variable.
    pub fn id(&self) -> usize {
        self.id
    }
    /// Returns true iff this variable has been assigned a value.
    pub fn is_bound(&self) -> bool {
        matches!(self.domain, Domain::Bound(_))
    }
    /// Returns the value of this variable if it is bound.
    pub fn value(&self) -> Option<isize> {
        match self.domain {
            Domain::Bound(v) => Some(v),
            _                => None,
        }
    }
    /// Returns the current domain of this variable.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }
    /// Returns the size of the current domain.
    pub fn len(&self) -> usize {
        self.domain.len()
    }
    /// A variable never has an empty domain.
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }
    /// Iterates over the values of the current domain.
    pub fn values(&self) -> DomainIter<'_> {
        self.domain.iter()
    }
    /// Returns true iff `value` may be assigned to this variable. When the
    /// variable is bound, this only checks equality with the bound value.
    pub fn contains(&self, value: isize) -> bool {
        self.domain.contains(value)
    }
    /// Binds this variable to the given `value`.
    pub fn assign(&mut self, value: isize) -> Result<(), Error> {
        match self.domain {
            Domain::Bound(v) =>
                Err(Error::AlreadyBound { id: self.id, value: v }),
            _ if !self.domain.contains(value) =>
                Err(Error::ValueNotInDomain { id: self.id, value }),
            _ => {
                self.domain = Domain::Bound(value);
                Ok(())
            }
        }
    }
}

// ----------------------------------------------------------------------------
// --- DECISION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This denotes a decision that was made during the search. It affects a given
/// `value` to the specified `variable`. Any given `Decision` should be
/// understood as ```[[ variable = value ]]````
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Decision {
    pub variable : usize,
    pub value    : isize
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_var {
    use crate::{Domain, Error, Variable};

    #[test]
    fn new_has_domain_of_size_n() {
        let x = Variable::new(0, 10).unwrap();
        assert_eq!(0, x.id());
        assert_eq!(10, x.len());
        assert!(!x.is_bound());
        assert_eq!((0..10).collect::<Vec<_>>(), x.values().collect::<Vec<_>>());
    }
    #[test]
    fn cannot_assign_twice() {
        let mut x = Variable::new(0, 10).unwrap();
        assert_eq!(Ok(()), x.assign(2));
        assert_eq!(Err(Error::AlreadyBound { id: 0, value: 2 }), x.assign(3));
        assert_eq!(Some(2), x.value());
    }
    #[test]
    fn empty_domains_are_rejected() {
        assert_eq!(Err(Error::EmptyDomain { id: 3 }), Variable::new(3, 0));
        assert_eq!(Err(Error::EmptyDomain { id: 4 }), Variable::new_range(4, 5, 4));
        assert_eq!(Err(Error::EmptyDomain { id: 5 }), Variable::from_set(5, vec![]));
    }
    #[test]
    fn singleton_range_is_not_empty() {
        let x = Variable::new_range(1, -3, -3).unwrap();
        assert_eq!(1, x.len());
        assert!(x.contains(-3));
        assert!(!x.is_bound());
    }
    #[test]
    fn cannot_assign_a_value_outside_the_domain() {
        let mut x = Variable::new_range(1, -1, 1).unwrap();
        assert_eq!(Err(Error::ValueNotInDomain { id: 1, value: 2 }), x.assign(2));
        assert!(!x.is_bound());

        let mut y = Variable::from_set(2, vec![-1, 1]).unwrap();
        assert_eq!(Err(Error::ValueNotInDomain { id: 2, value: 0 }), y.assign(0));
        assert_eq!(Ok(()), y.assign(-1));
    }
    #[test]
    fn from_set_sorts_and_dedups() {
        let x = Variable::from_set(0, vec![5, 1, 3, 1, 5]).unwrap();
        assert_eq!(3, x.len());
        assert_eq!(vec![1, 3, 5], x.values().collect::<Vec<_>>());
    }
    #[test]
    fn contains_on_bound_var_only_tests_equality() {
        let mut x = Variable::new(0, 10).unwrap();
        assert!(x.contains(7));
        x.assign(4).unwrap();
        assert!(x.contains(4));
        assert!(!x.contains(7));
        assert_eq!(&Domain::Bound(4), x.domain());
        assert_eq!(vec![4], x.values().collect::<Vec<_>>());
    }
    #[test]
    fn the_widest_interval_is_not_empty() {
        let x = Variable::new_range(0, isize::MIN, isize::MAX).unwrap();
        assert_eq!(usize::MAX, x.len());
        assert!(!x.is_empty());
        assert!(x.contains(isize::MIN));
        assert!(x.contains(isize::MAX));
    }
    #[test]
    fn new_accepts_every_size_an_isize_can_enumerate() {
        let largest = isize::MAX as usize + 1;
        let x = Variable::new(0, largest).unwrap();
        assert!(x.contains(isize::MAX));
        assert!(!x.contains(-1));
        assert_eq!(largest, x.len());

        assert_eq!(Err(Error::DomainTooLarge { id: 1, size: largest + 1 }), Variable::new(1, largest + 1));
        assert_eq!(Err(Error::DomainTooLarge { id: 2, size: usize::MAX }), Variable::new(2, usize::MAX));
    }
    #[test]
    fn copies_are_independent() {
        let x     = Variable::new(0, 2).unwrap();
        let mut y = x.clone();
        y.assign(1).unwrap();
        assert!(!x.is_bound());
        assert!(y.is_bound());
    }
}
