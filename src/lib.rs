//! Workspace-level integration tests for SeqCalc live in `tests/`.
