//! # zt_debug
//!
//! Debugging tools for zt. The stack-trace formatter puts every frame of a
//! flattened Java or Python trace back on its own line.
//!
//! ```rust
//! use zt_debug::{format_stack_trace, StackTraceLanguage};
//!
//! let trace = "java.lang.Error: x at a.B.c(B.java:1) at a.B.main(B.java:2)";
//! assert_eq!(
//!     format_stack_trace(trace, StackTraceLanguage::Java),
//!     "java.lang.Error: x\n at a.B.c(B.java:1)\n at a.B.main(B.java:2)"
//! );
//! ```

pub mod error;
pub mod stacktrace;

pub use error::{DebugError, DebugResult};
pub use stacktrace::{format_stack_trace, StackTraceLanguage};

use zt_core::{ToolCategory, ToolDescriptor};

/// Catalog entries for the tools in this crate.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![ToolDescriptor::new(
        "stacktrace-formatter",
        "Stack Trace Formatter",
        ToolCategory::Debugging,
        "Put each frame of a flattened Java or Python stack trace on its own line",
    )]
}
