use log::{debug, trace};

use crate::{
    context::{Context, Segment},
    encode::encode,
    error::{Diag, Error},
    ident::Idents,
    io::{ObjectSink, SourceLoader},
    parser::{Line, Source, Stmt},
    pseudo::Pseudo,
};

/// Two-pass driver. The first pass reads and classifies every file and fills
/// the symbol tables; the second pass replays the recorded lines and emits
/// object code.
pub struct Assembler<L: SourceLoader> {
    loader: L,
    ctx: Context,
}

impl<L: SourceLoader> Assembler<L> {
    pub fn new(loader: L, entry: &str) -> Self {
        Assembler {
            loader,
            ctx: Context::new(entry),
        }
    }

    pub fn code_symbols(&self) -> &Idents {
        &self.ctx.code
    }

    pub fn data_symbols(&self) -> &Idents {
        &self.ctx.data
    }

    /// Runs both passes and finalizes the sink.
    pub fn assemble<S: ObjectSink>(&mut self, sink: &mut S) -> Result<(), Diag> {
        let source = self.collect_symbols()?;
        self.generate(&source, sink)?;
        sink.finalize()?;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Pass 1

    pub fn collect_symbols(&mut self) -> Result<Source, Diag> {
        let entry = self.ctx.entry().to_string();
        if !self.loader.exists(&entry) {
            return Err(Error::FileNotFound(entry).into());
        }
        let raws = self.loader.load(&entry)?;
        self.ctx.rewind();
        self.scan(&entry, raws)
    }

    fn scan(&mut self, path: &str, raws: Vec<String>) -> Result<Source, Diag> {
        let mut lines = Vec::with_capacity(raws.len());
        for (idx, raw) in raws.iter().enumerate() {
            let mut line = Line::parse(path, idx, raw)?;
            self.first(&mut line)?;
            lines.push(line);
        }
        Ok(Source {
            path: path.to_string(),
            lines,
        })
    }

    fn first(&mut self, line: &mut Line) -> Result<(), Diag> {
        match &line.stmt {
            Stmt::Blank => {}
            Stmt::Pseudo(Pseudo::Include(target)) => {
                let target = target.clone();
                line.included = Some(self.include(line, &target)?);
            }
            Stmt::Pseudo(pseudo) => {
                debug!("{}:{}: {:?}", line.path(), line.no(), pseudo);
                pseudo.apply(&mut self.ctx).map_err(|e| line.diag(e))?;
            }
            Stmt::Head(words) => {
                let location = (line.path().to_string(), line.no());
                match self.ctx.segment {
                    Segment::Code => {
                        let addr = self.ctx.code_cursor().map_err(|e| line.diag(e))?;
                        self.ctx
                            .code
                            .define(&words[0], addr, location)
                            .map_err(|e| line.diag(e))?;
                        debug!("label {} = {:04X}", words[0], addr);
                    }
                    Segment::Data => {
                        let addr = self.ctx.data_address;
                        self.ctx
                            .data
                            .define(&words[0], addr, location)
                            .map_err(|e| line.diag(e))?;
                        let count = words
                            .get(1)
                            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_digit()))
                            .ok_or(Error::InvalidLength)
                            .and_then(|w| w.parse::<u16>().map_err(|_| Error::AddressOverflow))
                            .map_err(|e| line.diag(e))?;
                        self.ctx.reserve(count).map_err(|e| line.diag(e))?;
                        debug!("variable {}[{}] = {:04X}", words[0], count, addr);
                    }
                }
            }
            Stmt::Body(_) => match self.ctx.segment {
                Segment::Code => {
                    self.ctx.code_cursor().map_err(|e| line.diag(e))?;
                    self.ctx.advance_code();
                }
                Segment::Data => return Err(line.diag(Error::IndentedData)),
            },
        }
        Ok(())
    }

    fn include(&mut self, line: &Line, target: &str) -> Result<Source, Diag> {
        self.ctx
            .check_include(target, self.loader.exists(target))
            .map_err(|e| line.diag(e))?;
        let raws = self.loader.load(target).map_err(|e| line.diag(e))?;
        debug!("{}:{}: include {}", line.path(), line.no(), target);

        let saved = self.ctx.enter_include();
        let source = self.scan(target, raws)?;
        self.ctx.leave_include(saved);
        Ok(source)
    }

    // ------------------------------------------------------------------------
    // Pass 2

    pub fn generate<S: ObjectSink>(&mut self, source: &Source, sink: &mut S) -> Result<(), Diag> {
        self.ctx.rewind();
        self.emit(source, sink)
    }

    fn emit<S: ObjectSink>(&mut self, source: &Source, sink: &mut S) -> Result<(), Diag> {
        for line in &source.lines {
            self.second(line, sink)?;
        }
        Ok(())
    }

    fn second<S: ObjectSink>(&mut self, line: &Line, sink: &mut S) -> Result<(), Diag> {
        match &line.stmt {
            Stmt::Blank => {}
            Stmt::Pseudo(Pseudo::Include(_)) => {
                if let Some(included) = &line.included {
                    let saved = self.ctx.enter_include();
                    self.emit(included, sink)?;
                    self.ctx.leave_include(saved);
                }
            }
            Stmt::Pseudo(pseudo) => pseudo.apply(&mut self.ctx).map_err(|e| line.diag(e))?,
            Stmt::Head(words) => {
                if self.ctx.segment == Segment::Code {
                    let addr = self.ctx.code_cursor().map_err(|e| line.diag(e))?;
                    sink.write_line(&format!("{:04X}      ; {}", addr, words[0]))?;
                }
            }
            Stmt::Body(words) => {
                if self.ctx.segment == Segment::Data {
                    return Err(line.diag(Error::IndentedData));
                }
                let Some((mnemonic, args)) = words.split_first() else {
                    return Err(line.diag(Error::UnknownOpcode(line.code().to_string())));
                };
                let addr = self.ctx.code_cursor().map_err(|e| line.diag(e))?;
                let inst = encode(mnemonic, &self.ctx.operands(args)).map_err(|e| line.diag(e))?;
                let object = format!("{:04X}  {:04X};     {}", addr, inst.to_bin(), line.code());
                trace!("{}", object);
                sink.write_line(&object)?;
                self.ctx.advance_code();
            }
        }
        Ok(())
    }
}
