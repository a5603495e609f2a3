// Text statistics for the word counter

pub mod samples;
pub mod stats;

#[cfg(test)]
mod tests;

pub use samples::{find_sample, sample_texts, SampleText};
pub use stats::{count_stats, is_js_whitespace, TextStats};
