mod common;
mod insights;
mod scoring;
