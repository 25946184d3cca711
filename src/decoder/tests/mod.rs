//! Unit tests for image decoding

mod reader_tests;
