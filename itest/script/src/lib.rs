/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Native types with bindings generated by `build.rs`, exercised through `script-core`.

pub mod natives;

// Output of build.rs.
pub mod gen;

#[cfg(test)]
mod common;

#[cfg(test)]
mod prototype_test;
