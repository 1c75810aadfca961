//! Unit tests mirroring the src tree
