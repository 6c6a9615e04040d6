//! Shared library module for the Morpion app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod cli;
pub mod persistence;
pub mod session;
pub mod testing;
pub mod ui;
