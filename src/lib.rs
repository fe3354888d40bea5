mod ast;
mod load;
mod syn;

pub use ast::*;
pub use load::*;
pub use syn::*;

pub use load::error::Error as LoadError;
pub use syn::error::Error as ParseError;

/// Parse a simple inline string and return the document
pub fn from_str(input: &str) -> std::result::Result<Document, ParseError> {
    Parser::new(input).parse()
}
