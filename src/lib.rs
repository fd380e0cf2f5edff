//! Console walkthrough of three classic design patterns.
//!
//! - [`domain::prototype`]: documents cloned from a template
//! - [`domain::composite`]: a file/folder tree displayed in pre-order
//! - [`domain::template`]: a fixed open/edit/save sequence with a varying edit step
//!
//! [`application::Showcase`] runs them in order; [`config::Settings`] tunes the run.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
