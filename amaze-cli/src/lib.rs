//! Application layer for the `amaze` binary: PNG pixel classification and
//! a maze image generator.

pub mod image_io;
pub mod mazegen;
