// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! taskcal - next-occurrence engine for recurring tasks

use std::process::ExitCode;

use taskcal_cli::run;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}
