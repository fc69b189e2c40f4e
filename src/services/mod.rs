pub mod assemble;
pub mod encoding;
pub mod pipeline;
pub mod tabular;
