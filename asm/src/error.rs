use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Label `{0}` already defined")]
    RedefinedLabel(String),

    #[error("Variable `{0}` already defined")]
    RedefinedVariable(String),

    #[error("`{0}` is not a valid statement on the first column")]
    InvalidStatement(String),

    #[error("Invalid variable length supplied")]
    InvalidLength,

    #[error("All valid statements in data segment should start on first column")]
    IndentedData,

    #[error("Pseudo op `{0}` does not exist")]
    UnknownPseudoOp(String),

    #[error("Pseudo op `{0}` passed non-numeric argument: `{1}`")]
    NonNumericArgument(String, String),

    #[error("`.org` cannot be set in a data segment")]
    OrgInData,

    #[error("Cannot include into included files")]
    NestedInclude,

    #[error("Cannot open file that is already being read: `{0}`")]
    SelfInclude(String),

    #[error("File `{0}` does not exist")]
    FileNotFound(String),

    #[error("Opcode `{0}` is not defined")]
    UnknownOpcode(String),

    #[error("Opcode `{0}` should have {1}")]
    Arity(String, &'static str),

    #[error("First operand of `{0}` needs to be either `S` or `X`")]
    AluRegister(String),

    #[error("Invalid argument: `{0}`")]
    InvalidArgument(String),

    #[error("Argument outside range: `{0}`")]
    OutOfRange(String),

    #[error("Address space overflow")]
    AddressOverflow,

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbols")]
    Serialize(#[source] serde_yaml::Error),
}

/// Source position of a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    /// 1-based
    pub line: usize,
    pub raw: String,
}

/// The single fatal error that ends a run.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct Diag {
    pub location: Option<Location>,
    #[source]
    pub error: Error,
}

impl Diag {
    pub fn at(file: &str, line: usize, raw: &str, error: Error) -> Self {
        Diag {
            location: Some(Location {
                file: file.to_string(),
                line,
                raw: raw.to_string(),
            }),
            error,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print(&self) {
        cprintln!("<red,bold>error</>: {}", self.error);

        if let Some(loc) = &self.location {
            cprintln!("     <blue>--></> <underline>{}:{}</>", loc.file, loc.line);
            cprintln!("      <blue>|</>");
            cprintln!(" <blue>{:>4} |</> {}", loc.line, loc.raw);
            cprintln!("      <blue>|</>");
        }
    }
}

impl From<Error> for Diag {
    fn from(error: Error) -> Self {
        Diag {
            location: None,
            error,
        }
    }
}
