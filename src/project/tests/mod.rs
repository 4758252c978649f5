//! Unit tests for the project domain.
