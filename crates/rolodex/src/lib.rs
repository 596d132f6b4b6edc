//! Rolodex - a small professional-network graph.
//!
//! This crate provides both a CLI application and a library for building a
//! network of professional profiles and querying it: who is connected to
//! whom, where two people worked together, and how far apart they are.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod domain;
pub mod error;
pub mod network;

// Public CLI module (needed by binary)
pub mod app;
pub mod cli;
pub mod output;

// Command implementations
pub mod commands;

pub mod config;
