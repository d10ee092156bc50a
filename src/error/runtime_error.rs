#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The variable store cannot hold any more distinct names.
    VariableStoreOverflow {
        /// The maximum number of variables the store can hold.
        capacity: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Writing program output failed.
    WriteFailed {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::VariableStoreOverflow { capacity, line } => write!(f,
                                                                     "Error on line {line}: Variable store overflow: capacity of {capacity} variables exceeded."),
            Self::WriteFailed { line } => {
                write!(f, "Error on line {line}: Failed to write program output.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
