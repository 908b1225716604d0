pub mod cli;
pub mod detect;
pub mod extract;
pub mod logger;
pub mod output;
pub mod pipeline;
