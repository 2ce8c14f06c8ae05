//! Unit tests for config file loading and settings construction.
