// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod activity;
pub mod branch;
pub mod follow_up;
pub mod lead;
pub mod lead_note;
pub mod paging;
pub mod task;
pub mod user;
