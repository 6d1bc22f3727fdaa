//! RPM macro override file generation.
//!
//! Control flow is policy -> writer -> comment formatter: the policy decides
//! which files a build configuration requests, the writer assembles and
//! persists each file, the formatter renders the optional comment preamble.

pub mod comments;
pub mod policy;
pub mod writer;
