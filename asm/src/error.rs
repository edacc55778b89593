use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown instruction: `{0}`")]
    UnknownMnemonic(String),

    #[error("Unknown trap: `{0}`")]
    UnknownTrap(String),

    #[error("Malformed operand: {0}")]
    MalformedOperand(String),

    #[error("Bad label: {0}")]
    BadLabelNode(String),

    #[error("Invalid instruction node: {0}")]
    InvalidNode(String),

    #[error("Program must be a list of instructions")]
    BadProgram,

    #[error("Undefined label: `{0}`")]
    UndefinedLabel(String),

    #[error("Invalid directive: {0}")]
    BadInclude(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to parse program: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Print the error as a colored diagnostic.
    pub fn print_diag(&self) {
        cprintln!("<red,bold>error</>: {}", self);
    }
}
