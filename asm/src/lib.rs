pub mod assembler;
pub mod context;
pub mod encode;
pub mod error;
pub mod eval;
pub mod ident;
pub mod io;
pub mod parser;
pub mod pseudo;
pub mod util;

pub use assembler::Assembler;
pub use error::{Diag, Error};
pub use io::{FsLoader, ObjectFile, ObjectSink, SourceLoader};
