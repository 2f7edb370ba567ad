// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod book;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod grouping;
pub mod logging;
pub mod models;
pub mod sorting;
pub mod totals;
pub mod utils;
pub mod validation;
