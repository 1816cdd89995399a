use std::fmt;

/// One constructor parameter / stored field of a node class, parsed
/// from a compact `"Type name"` spec string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec<'a> {
    pub ty: &'a str,
    pub name: &'a str,
}

impl<'a> FieldSpec<'a> {
    /// Splits a spec at its first space. The type may be qualified
    /// (`cpplox::Token`) but may not itself contain spaces.
    pub fn parse(spec: &'a str) -> Result<Self, FieldSpecError> {
        let Some((ty, name)) = spec.split_once(' ') else {
            return Err(FieldSpecError::new(spec));
        };
        if ty.is_empty() || name.is_empty() {
            return Err(FieldSpecError::new(spec));
        }
        Ok(FieldSpec { ty, name })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpecError {
    spec: String,
}

impl FieldSpecError {
    fn new(spec: &str) -> Self {
        FieldSpecError {
            spec: spec.to_owned(),
        }
    }
}

impl std::error::Error for FieldSpecError {}

impl fmt::Display for FieldSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field spec {:?} is not of the form \"Type name\"",
            self.spec
        )
    }
}
