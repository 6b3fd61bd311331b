use std::collections::HashMap;

use c10asm::{Assembler, Diag, Error, SourceLoader};

/// Files held in memory, keyed by path.
pub struct MemLoader(HashMap<String, String>);

impl MemLoader {
    pub fn new(files: &[(&str, &str)]) -> Self {
        MemLoader(
            files
                .iter()
                .map(|(path, text)| (path.to_string(), text.to_string()))
                .collect(),
        )
    }
}

impl SourceLoader for MemLoader {
    fn exists(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    fn load(&self, path: &str) -> Result<Vec<String>, Error> {
        self.0
            .get(path)
            .map(|text| text.lines().map(str::to_string).collect())
            .ok_or_else(|| Error::FileNotFound(path.to_string()))
    }
}

/// Assembles with the first file as entry. Returns whatever reached the sink.
pub fn run(files: &[(&str, &str)]) -> (Vec<String>, Result<(), Diag>) {
    let mut asm = Assembler::new(MemLoader::new(files), files[0].0);
    let mut sink = Vec::new();
    let result = asm.assemble(&mut sink);
    (sink, result)
}

pub fn assemble(files: &[(&str, &str)]) -> Vec<String> {
    let (sink, result) = run(files);
    if let Err(diag) = result {
        panic!("{:?}", diag);
    }
    sink
}

/// Runs expecting failure; returns (file, line, error).
pub fn fail(files: &[(&str, &str)]) -> (String, usize, Error) {
    let (_, result) = run(files);
    let diag = result.expect_err("assembly should fail");
    let loc = diag.location.expect("error should carry a location");
    (loc.file, loc.line, diag.error)
}
