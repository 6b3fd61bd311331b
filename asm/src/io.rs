use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::error::Error;

/// Where source files come from.
pub trait SourceLoader {
    fn exists(&self, path: &str) -> bool;
    fn load(&self, path: &str) -> Result<Vec<String>, Error>;
}

/// Where object lines go.
pub trait ObjectSink {
    fn write_line(&mut self, line: &str) -> Result<(), Error>;
    /// Terminates the listing with one blank line.
    fn finalize(&mut self) -> Result<(), Error>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn load(&self, path: &str) -> Result<Vec<String>, Error> {
        let file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
        BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(Error::FileRead)
    }
}

pub struct ObjectFile {
    path: String,
    writer: BufWriter<File>,
}

impl ObjectFile {
    pub fn create(path: &str) -> Result<Self, Error> {
        let file = File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
        Ok(ObjectFile {
            path: path.to_string(),
            writer: BufWriter::new(file),
        })
    }
}

impl ObjectSink for ObjectFile {
    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        writeln!(self.writer, "{}", line).map_err(|e| Error::FileWrite(self.path.clone(), e))
    }

    fn finalize(&mut self) -> Result<(), Error> {
        self.write_line("")?;
        self.writer
            .flush()
            .map_err(|e| Error::FileWrite(self.path.clone(), e))
    }
}

impl ObjectSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.push(line.to_string());
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), Error> {
        self.write_line("")
    }
}
