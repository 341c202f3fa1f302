//! Integration test suite for stackbrew-gen

mod helpers;

mod test_update;
