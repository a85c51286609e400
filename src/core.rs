pub mod config;
pub mod frontmatter;
pub mod resolver;
pub mod scanner;

#[cfg(test)]
pub mod test_utils;
