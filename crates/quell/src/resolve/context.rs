use quell_parser::ast::Arg;

/// One resolution request: the name being resolved plus the arguments the
/// query attached to it.
///
/// Argument values are the literal source text from the query; interpreting
/// them (numbers, booleans, arrays) is the backend's concern.
#[derive(Clone, Copy, Debug)]
pub struct ResolveContext<'a> {
    pub name: &'a str,
    pub args: &'a [Arg<'a>],
}

impl<'a> ResolveContext<'a> {
    /// Creates a resolution context.
    pub fn new(name: &'a str, args: &'a [Arg<'a>]) -> Self {
        Self { name, args }
    }

    /// Looks up a named argument's literal value.
    pub fn arg(&self, name: &str) -> Option<&'a str> {
        self.args
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| arg.value.as_ref())
    }
}
