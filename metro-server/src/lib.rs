//! Metro route planner server.
//!
//! A web application that answers: "how do I get from this station to
//! that one?" over a small multi-line metro network, with at most one
//! change of line.

pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
