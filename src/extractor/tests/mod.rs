//! Unit tests for pixel extraction

mod test_utils;
mod color_tests;
mod extractor_tests;
