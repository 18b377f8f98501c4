pub mod check;
pub mod generate;
pub mod scan;
pub mod source_loader;
pub mod translate;

#[cfg(test)]
mod source_loader_tests;
#[cfg(test)]
mod translate_tests;
