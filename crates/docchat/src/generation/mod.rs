//! Answer synthesis

mod answer;

pub use answer::AnswerSynthesizer;
