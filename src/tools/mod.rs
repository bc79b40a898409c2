//! Tool system for marker-based dispatch.

pub mod arguments;
pub mod tool;

pub use arguments::ToolArguments;
pub use tool::{FunctionTool, Tool};
