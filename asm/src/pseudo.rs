use crate::{
    context::{Context, Segment},
    error::Error,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pseudo {
    Org(u16),
    Cseg,
    Dseg,
    Include(String),
}

impl Pseudo {
    pub fn parse(words: &[&str]) -> Result<Pseudo, Error> {
        let Some((op, args)) = words.split_first() else {
            return Err(Error::UnknownPseudoOp(String::new()));
        };
        let arg = args.first().copied().unwrap_or("");
        match *op {
            ".org" => {
                if arg.is_empty() || !arg.chars().all(|c| c.is_ascii_digit()) {
                    return Err(Error::NonNumericArgument(op.to_string(), arg.to_string()));
                }
                let origin = arg.parse::<u16>().map_err(|_| Error::AddressOverflow)?;
                Ok(Pseudo::Org(origin))
            }
            ".cseg" => Ok(Pseudo::Cseg),
            ".dseg" => Ok(Pseudo::Dseg),
            ".include" => Ok(Pseudo::Include(arg.to_string())),
            _ => Err(Error::UnknownPseudoOp(op.to_string())),
        }
    }

    /// Applies segment and origin changes. `.include` needs the driver, so it
    /// is a no-op here.
    pub fn apply(&self, ctx: &mut Context) -> Result<(), Error> {
        match self {
            Pseudo::Org(origin) => {
                if ctx.segment == Segment::Data {
                    return Err(Error::OrgInData);
                }
                ctx.set_origin(*origin);
            }
            Pseudo::Cseg => ctx.segment = Segment::Code,
            Pseudo::Dseg => ctx.segment = Segment::Data,
            Pseudo::Include(_) => {}
        }
        Ok(())
    }
}
