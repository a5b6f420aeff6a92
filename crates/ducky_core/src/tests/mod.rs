//! Tests that drive several subsystems through a [`CoreContext`](crate::CoreContext)

mod bridge_integration;
