// Text matching: normalization, keyword extraction and similarity scoring.

pub mod keywords;
pub mod normalize;
pub mod similarity;
