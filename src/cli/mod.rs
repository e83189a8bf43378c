pub use self::args::Args;
pub use self::extractor::ArgVector;

mod args;
mod extractor;
