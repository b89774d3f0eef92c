// SPDX-License-Identifier: Apache-2.0

pub mod bit;
pub mod gate;
pub mod truth_table;
