pub mod output;
pub mod prompt;

pub use prompt::ConsoleResolver;
