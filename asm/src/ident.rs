use indexmap::IndexMap;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ident {
    /// Label in the code segment
    Code,
    /// Variable in the data segment
    Data,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub addr: u16,
    /// (file, 1-based line)
    pub location: (String, usize),
}

/// Write-once name to address table, in definition order.
#[derive(Debug, Clone)]
pub struct Idents {
    kind: Ident,
    map: IndexMap<String, Symbol>,
}

impl Idents {
    pub fn new(kind: Ident) -> Self {
        Idents {
            kind,
            map: IndexMap::new(),
        }
    }

    pub fn kind(&self) -> Ident {
        self.kind
    }

    pub fn define(&mut self, name: &str, addr: u16, location: (String, usize)) -> Result<(), Error> {
        if !is_valid_name(name) {
            return Err(Error::InvalidStatement(name.to_string()));
        }
        if self.map.contains_key(name) {
            return Err(match self.kind {
                Ident::Code => Error::RedefinedLabel(name.to_string()),
                Ident::Data => Error::RedefinedVariable(name.to_string()),
            });
        }
        self.map.insert(name.to_string(), Symbol { addr, location });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.map.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.map.get(name).map(|sym| sym.addr)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.map.iter().map(|(name, sym)| (name.as_str(), sym))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Alphanumeric, and not made of digits alone.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(char::is_alphanumeric)
        && !name.chars().all(char::is_numeric)
}
