/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Per class, code is assembled in this order:
// - overloads: callables grouped by name, selectors for overloaded names
// - functions: one wrapper per callable
// - marshalling: value <-> handle conversions
// - prototype: instance prototype and constructor object
// - classes: the file around all of the above, and mod.rs

pub mod classes;
pub mod functions;
pub mod marshalling;
pub mod overloads;
pub mod prototype;
