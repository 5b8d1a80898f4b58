// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod activity_handler;
pub mod auth_handler;
pub mod branch_handler;
pub mod lead_handler;
pub mod lead_note_handler;
pub mod task_handler;
pub mod user_handler;
