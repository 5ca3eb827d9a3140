use std::fmt::{self, Debug, Display, Formatter};

/// Prints every state of a solution path with its index.
pub struct SolutionFormatter<'a, S> {
    path: &'a [S],
}

impl<'a, S: Display> SolutionFormatter<'a, S> {
    pub fn new(path: &'a [S]) -> Self {
        Self { path }
    }
}

impl<S: Display> Display for SolutionFormatter<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, state) in self.path.iter().enumerate() {
            writeln!(f, "  (State {})", i)?;
            write!(f, "{}", state)?;
        }
        Ok(())
    }
}

impl<S: Display> Debug for SolutionFormatter<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
