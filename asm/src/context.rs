use crate::{
    error::Error,
    eval::Operands,
    ident::{Ident, Idents},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Segment {
    #[default]
    Code,
    Data,
}

/// Mutable state of a run, shared by both passes.
#[derive(Debug, Clone)]
pub struct Context {
    pub segment: Segment,
    pub code_address: u16,
    pub data_address: u16,
    pub code: Idents,
    pub data: Idents,
    entry: String,
    included: bool,
    code_full: bool,
}

impl Context {
    pub fn new(entry: &str) -> Self {
        Context {
            segment: Segment::Code,
            code_address: 0,
            data_address: 0,
            code: Idents::new(Ident::Code),
            data: Idents::new(Ident::Data),
            entry: entry.to_string(),
            included: false,
            code_full: false,
        }
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Back to the start of the entry file. Symbol tables are kept.
    pub fn rewind(&mut self) {
        self.segment = Segment::Code;
        self.code_address = 0;
        self.data_address = 0;
        self.included = false;
        self.code_full = false;
    }

    /// Address of the next code word. Fails once the word at `0xFFFF` has
    /// been placed.
    pub fn code_cursor(&self) -> Result<u16, Error> {
        if self.code_full {
            return Err(Error::AddressOverflow);
        }
        Ok(self.code_address)
    }

    pub fn advance_code(&mut self) {
        match self.code_address.checked_add(1) {
            Some(next) => self.code_address = next,
            None => self.code_full = true,
        }
    }

    pub fn set_origin(&mut self, origin: u16) {
        self.code_address = origin;
        self.code_full = false;
    }

    /// Reserves `count` elements of data space and returns the first address.
    pub fn reserve(&mut self, count: u16) -> Result<u16, Error> {
        let start = self.data_address;
        self.data_address = start.checked_add(count).ok_or(Error::AddressOverflow)?;
        Ok(start)
    }

    pub fn check_include(&self, target: &str, exists: bool) -> Result<(), Error> {
        if !exists {
            return Err(Error::FileNotFound(target.to_string()));
        }
        if self.included {
            return Err(Error::NestedInclude);
        }
        if target == self.entry {
            return Err(Error::SelfInclude(target.to_string()));
        }
        Ok(())
    }

    /// Included files start in the code segment. Returns the segment to restore.
    pub fn enter_include(&mut self) -> Segment {
        let saved = self.segment;
        self.segment = Segment::Code;
        self.included = true;
        saved
    }

    pub fn leave_include(&mut self, saved: Segment) {
        self.segment = saved;
        self.included = false;
    }

    pub fn operands<'a>(&'a self, args: &'a [String]) -> Operands<'a> {
        Operands::new(args, &self.code, &self.data, self.code_address)
    }
}
