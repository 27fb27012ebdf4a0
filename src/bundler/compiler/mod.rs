//! External compiler invocation.
//!
//! - [`invoker`] - spawns a compiler and captures its output and exit status
//! - [`CompilerHandle`] - per-format shared helper that interprets exit status
//! - [`HandleRegistry`] - process-wide cache handing out one handle per format

mod handle;
pub mod invoker;
mod registry;

pub use handle::CompilerHandle;
pub use invoker::{CompilationResult, CompileInvocation};
pub use registry::{HandleRegistry, registry};
