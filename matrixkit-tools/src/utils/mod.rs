/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
pub mod cmd_tool_error;
pub use cmd_tool_error::*;

pub type CMDResult<T> = Result<T, CMDToolError>;

pub mod polyfit;
pub use polyfit::*;

pub mod tracing;
pub use self::tracing::{init_subscriber, init_test_subscriber};
