//! Core functionality for gristctl
//!
//! This module contains the protocol logic that sits between the command line
//! and the Grist REST API.

pub mod scim; // SCIM bulk provisioning
