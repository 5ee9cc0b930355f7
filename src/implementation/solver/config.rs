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

//! This module provides the configuration of the branch and bound solvers.

use std::time::Duration;

use derive_builder::Builder;

use crate::abstraction::CutsetType;

/// The parameters of a branch and bound solver. These are typically built
/// with a `SolverConfigBuilder`:
///
/// ```
/// # use ddbnb::*;
/// # use std::time::Duration;
/// let config = SolverConfigBuilder::default()
///     .width(100)
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(100, config.width);
/// assert_eq!(Some(Duration::from_secs(30)), config.timeout);
/// assert_eq!(CutsetType::Frontier, config.cutset_type);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct SolverConfig {
    /// The maximum width of the restricted and relaxed diagrams. It is
    /// always capped to the number of variables which are still free.
    #[builder(default = "usize::MAX")]
    pub width: usize,
    /// The time budget of a `solve()` call (none by default).
    #[builder(setter(strip_option), default)]
    pub timeout: Option<Duration>,
    /// The kind of cutset used to branch after a relaxed diagram.
    #[builder(default = "CutsetType::Frontier")]
    pub cutset_type: CutsetType,
}
impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            width      : usize::MAX,
            timeout    : None,
            cutset_type: CutsetType::Frontier,
        }
    }
}
