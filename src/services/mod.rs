// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod stats;
pub mod store;

pub use stats::{weekly_series, weekly_stats, TRAILING_WEEKS};
pub use store::WorkoutStore;
