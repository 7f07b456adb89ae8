//! Function calls.

use super::Fragment;

/// A call by canonical name. The engine decides the rendered spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub(crate) name: String,
    pub(crate) args: Vec<Fragment>,
    pub(crate) distinct: bool,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            distinct: false,
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<Fragment>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<F: Into<Fragment>>(mut self, args: impl IntoIterator<Item = F>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// `NAME(DISTINCT ...)`
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[Fragment] {
        &self.args
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }
}
