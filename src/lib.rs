//! Tourism Assist - Application wizard and FAQ assistant for a tourism portal
//!
//! This crate serves two scripted conversations over HTTP: a linear
//! application wizard that collects answers step by step and hands them off
//! after an explicit confirm, and a keyword-driven FAQ assistant with quick
//! actions and a handful of languages.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
