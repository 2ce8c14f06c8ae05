//! Unit tests for card parsing and status resolution.
