pub mod checker;
pub mod cli;
pub mod config;
pub mod corrector;
pub mod document;
pub mod error;

pub use checker::SpellChecker;
pub use config::Config;
pub use corrector::{AmbiguousToken, Correction, Corrector, Resolver, SpellOracle};
pub use error::CorrectError;
