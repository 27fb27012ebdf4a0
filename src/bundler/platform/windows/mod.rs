//! Windows installer formats.
//!
//! Both generators render their scripts on any host; compiling them needs
//! the Windows toolchains (or compatible wrappers) configured in
//! [`Settings`](crate::bundler::Settings).

pub mod inno;
mod utils;
pub mod wix;
