/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Stmt` and `Expr` sum types and the `Program` root
/// - expressions: Definitions for each expression kind
/// - statements: Definitions for each statement kind
///
/// Every node renders its canonical text through `Display`.
pub mod ast;
pub mod expressions;
pub mod statements;
