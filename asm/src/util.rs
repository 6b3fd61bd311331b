use color_print::cprintln;
use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    error::Error,
    ident::{Ident, Idents},
};

pub fn print_dump(code: &Idents, data: &Idents) {
    for idents in [code, data] {
        let title = match idents.kind() {
            Ident::Code => "code",
            Ident::Data => "data",
        };
        println!(
            "------+------[{}]{}",
            title,
            "-".repeat(45 - title.len())
        );
        if idents.is_empty() {
            println!("      |");
        }
        for (name, sym) in idents.iter() {
            let (file, line) = &sym.location;
            match idents.kind() {
                Ident::Code => cprintln!(
                    "<green>{:04X}</>  | <green>{:<16}</> <underline>{}:{}</>",
                    sym.addr,
                    name,
                    file,
                    line
                ),
                Ident::Data => cprintln!(
                    "<blue>{:04X}</>  | <blue>{:<16}</> <underline>{}:{}</>",
                    sym.addr,
                    name,
                    file,
                    line
                ),
            }
        }
    }
    println!("------+-----------------------------------------------------");
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SymbolMap<'a> {
    pub code: IndexMap<&'a str, u16>,
    pub data: IndexMap<&'a str, u16>,
}

impl<'a> SymbolMap<'a> {
    pub fn new(code: &'a Idents, data: &'a Idents) -> Self {
        SymbolMap {
            code: code.iter().map(|(name, sym)| (name, sym.addr)).collect(),
            data: data.iter().map(|(name, sym)| (name, sym.addr)).collect(),
        }
    }

    pub fn to_yaml(&self) -> Result<String, Error> {
        serde_yaml::to_string(self).map_err(Error::Serialize)
    }
}

pub fn export_symbols(path: &str, code: &Idents, data: &Idents) -> Result<(), Error> {
    let yaml = SymbolMap::new(code, data).to_yaml()?;
    std::fs::write(path, yaml).map_err(|e| Error::FileWrite(path.to_string(), e))
}
