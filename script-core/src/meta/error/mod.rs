/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Errors in the runtime: value conversion, failed calls and refused property access.

mod convert_error;
mod invocation_error;
mod property_error;

pub use convert_error::ConvertError;
pub use invocation_error::InvocationError;
pub use property_error::PropertyError;
