/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` sum type, binary operators and printing
/// - expressions: Numbers, variables, binary operations and calls
/// - statements: Function prototypes and definitions
pub mod ast;
pub mod expressions;
pub mod statements;
