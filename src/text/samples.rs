use serde::Serialize;

/// Canned text the word counter offers to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleText {
    pub title: &'static str,
    pub content: &'static str,
}

static SAMPLES: [SampleText; 3] = [
    SampleText {
        title: "Lorem Ipsum",
        content: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    },
    SampleText {
        title: "Technical Documentation",
        content: "This is a sample technical documentation. It contains multiple sentences and paragraphs. Each paragraph demonstrates different aspects of text analysis. The word counter tool can analyze various types of content effectively.",
    },
    SampleText {
        title: "Creative Writing",
        content: "The sun was setting behind the mountains, casting long shadows across the valley. Birds were returning to their nests, and the evening breeze carried the scent of wildflowers. It was a perfect moment of tranquility.",
    },
];

pub fn sample_texts() -> &'static [SampleText] {
    &SAMPLES
}

pub fn find_sample(title: &str) -> Option<&'static SampleText> {
    SAMPLES.iter().find(|s| s.title.eq_ignore_ascii_case(title))
}
