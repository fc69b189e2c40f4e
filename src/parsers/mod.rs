pub mod classifier;
pub mod djvu_text;
