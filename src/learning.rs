// File: src/learning.rs
use crate::core::context::ContextModel;
use log::debug;

/// Sample sentences the trained model starts from.
pub const SEED_CORPUS: &[&str] = &[
    "I am going to the store",
    "I am happy to see you",
    "Would you like to join us",
    "Thank you for your help",
    "I need to finish this work",
    "I want to learn more",
    "Going to be a great day",
    "Need to get some rest",
];

/// Feeds a fixed corpus into a `ContextModel`. Typed input is never fed back.
pub struct CorpusTrainer {
    min_words: usize,
}

impl Default for CorpusTrainer {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusTrainer {
    pub fn new() -> Self {
        Self { min_words: 3 }
    }

    /// Trains `model` on `sentences`, returning how many sentences were used.
    pub fn train<'a, I>(&self, model: &mut ContextModel, sentences: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut used = 0;
        for sentence in sentences {
            if sentence.split_whitespace().count() < self.min_words {
                debug!("skipping short sentence {:?}", sentence);
                continue;
            }
            let added = model.add_sentence(sentence);
            debug!("trained on {:?} ({} trigrams)", sentence, added);
            used += 1;
        }
        used
    }
}

impl ContextModel {
    /// A model with the given limit, trained on `SEED_CORPUS`.
    pub fn seeded(max_suggestions: usize) -> Self {
        let mut model = ContextModel::new(max_suggestions);
        let used = CorpusTrainer::new().train(&mut model, SEED_CORPUS.iter().copied());
        debug!("seeded context model from {} sentences", used);
        model
    }
}
