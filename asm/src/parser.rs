use crate::{
    error::{Diag, Error},
    pseudo::Pseudo,
};

// ----------------------------------------------------------------------------
// Source

/// A file as seen by the first pass. Included files hang off their
/// `.include` line, so the second pass replays the exact same traversal.
#[derive(Debug, Clone)]
pub struct Source {
    pub path: String,
    pub lines: Vec<Line>,
}

// ----------------------------------------------------------------------------
// Line

#[derive(Debug, Clone)]
pub struct Line {
    path: String,
    idx: usize,
    raw: String,
    code: String,
    pub stmt: Stmt,
    pub included: Option<Source>,
}

impl Line {
    pub fn parse(path: &str, idx: usize, raw: &str) -> Result<Line, Diag> {
        let code = match raw.split_once(';') {
            Some((code, _comment)) => code,
            None => raw,
        };
        let stmt = Stmt::parse(code).map_err(|e| Diag::at(path, idx + 1, raw, e))?;
        Ok(Line {
            path: path.to_string(),
            idx,
            raw: raw.to_string(),
            code: code.to_string(),
            stmt,
            included: None,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 1-based line number
    pub fn no(&self) -> usize {
        self.idx + 1
    }

    /// Source text without the comment, trimmed.
    pub fn code(&self) -> &str {
        self.code.trim()
    }

    pub fn diag(&self, error: Error) -> Diag {
        Diag::at(&self.path, self.no(), &self.raw, error)
    }
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Blank,
    Pseudo(Pseudo),
    /// Starts on the first column: a label or a variable, depending on segment.
    Head(Vec<String>),
    /// Indented: mnemonic followed by its operands.
    Body(Vec<String>),
}

impl Stmt {
    pub fn parse(code: &str) -> Result<Stmt, Error> {
        let words: Vec<&str> = code.split_whitespace().collect();

        if words.is_empty() {
            return Ok(Stmt::Blank);
        }

        if code.starts_with(char::is_whitespace) {
            let words: Vec<String> = code
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect();
            if words.is_empty() {
                return Err(Error::UnknownOpcode(code.trim().to_string()));
            }
            return Ok(Stmt::Body(words));
        }

        if code.starts_with('.') {
            return Ok(Stmt::Pseudo(Pseudo::parse(&words)?));
        }

        Ok(Stmt::Head(words.into_iter().map(str::to_string).collect()))
    }
}
