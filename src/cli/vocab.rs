//! Vocabulary listing

use super::CheckCommandError;
use crate::vocabulary::{self, Vocabulary};

/// Print one vocabulary, or all of them
pub fn list_vocabularies(name: Option<&str>) -> Result<(), CheckCommandError> {
    match name {
        Some(name) => {
            let vocab = vocabulary::by_name(name)
                .ok_or_else(|| CheckCommandError::UnknownVocabulary(name.to_string()))?;
            print_vocabulary(vocab);
        }
        None => {
            for vocab in vocabulary::ALL {
                print_vocabulary(vocab);
                println!();
            }
        }
    }
    Ok(())
}

fn print_vocabulary(vocab: &Vocabulary) {
    println!("{} ({}):", vocab.name, vocab.len());
    for term in vocab.terms {
        println!("  {}", term);
    }
}
