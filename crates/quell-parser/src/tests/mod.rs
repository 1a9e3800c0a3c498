mod property_tests;
mod scanner_tests;
mod token_source_tests;
mod utils;
