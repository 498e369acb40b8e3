use std::fmt;

use crate::css::Declarations;

/// A selector with its declaration block.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Declarations,
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for declaration in self.declarations.iter().filter(|d| d.is_valid()) {
            writeln!(f, "  {declaration}")?;
        }
        write!(f, "}}")
    }
}

/// Stacks fragments under a selector.
#[derive(Debug, Clone)]
pub struct StyledBuilder {
    selector: String,
    declarations: Declarations,
}

impl StyledBuilder {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Declarations::new(),
        }
    }

    pub fn with(mut self, fragment: Declarations) -> Self {
        self.declarations.extend(fragment);
        self
    }

    pub fn build(self) -> StyleRule {
        StyleRule {
            selector: self.selector,
            declarations: self.declarations,
        }
    }
}
