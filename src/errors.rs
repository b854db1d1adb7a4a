use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AssemblyError {
    #[error("Syntax Error: {0}")]
    PestError(#[from] pest::error::Error<crate::parser::Rule>),

    #[error("Unknown instruction on line {line}: \"{mnemonic}\"")]
    UnknownMnemonic { line: usize, mnemonic: String },

    #[error("Bad operand on line {line}: {reason}")]
    BadOperand { line: usize, reason: String },

    #[error("Undefined label on line {line}: \"{name}\"")]
    UndefinedLabel { line: usize, name: String },

    #[error("Semantic Error on line {line}: {reason}")]
    SemanticError { line: usize, reason: String },

    #[error("Capacity exceeded: {reason}")]
    CapacityExceeded { reason: String },
}
