// Unit tests for slowserve
// This module organizes all unit tests

pub mod worker_config;
