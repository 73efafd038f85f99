/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits for reading and writing instantaneous codes.

The only code in this crate is the [Fibonacci (Zeckendorf)
code](fibonacci), implemented as a pair of traits for reading and writing
([`FibRead`] and [`FibWrite`]). The trait for reading depends on
[`BitRead`](crate::traits::BitRead), whereas the trait for writing depends
on [`BitWrite`](crate::traits::BitWrite); both are implemented for every
bit stream, so pulling them in scope is all it takes.

*/

pub mod fibonacci;
pub use fibonacci::{FibRead, FibWrite, len_fib};
