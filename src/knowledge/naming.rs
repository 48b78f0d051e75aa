//! Identifier naming convention checks.

use std::fmt;

use regex::Regex;

use super::KnowledgeError;

/// Where an identifier appears; selects the rule that applies to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamingContext {
    #[default]
    Variable,
    Function,
    Class,
    Interface,
    Constant,
    File,
}

impl NamingContext {
    pub const ALL: [NamingContext; 6] = [
        Self::Variable,
        Self::Function,
        Self::Class,
        Self::Interface,
        Self::Constant,
        Self::File,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Function => "function",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Constant => "constant",
            Self::File => "file",
        }
    }

    /// Case-insensitive parse.
    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.to_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == lowered)
    }

    pub fn style(&self) -> NamingStyle {
        match self {
            Self::Variable | Self::Function => NamingStyle::CamelCase,
            Self::Class | Self::Interface => NamingStyle::PascalCase,
            Self::Constant => NamingStyle::UpperSnakeCase,
            Self::File => NamingStyle::KebabCase,
        }
    }
}

impl fmt::Display for NamingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingStyle {
    CamelCase,
    PascalCase,
    UpperSnakeCase,
    KebabCase,
}

impl NamingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CamelCase => "camelCase",
            Self::PascalCase => "PascalCase",
            Self::UpperSnakeCase => "UPPER_SNAKE_CASE",
            Self::KebabCase => "kebab-case",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            Self::CamelCase => r"^[a-z][a-zA-Z0-9]*$",
            Self::PascalCase => r"^[A-Z][a-zA-Z0-9]*$",
            Self::UpperSnakeCase => r"^[A-Z][A-Z0-9_]*$",
            Self::KebabCase => r"^[a-z][a-z0-9-]*$",
        }
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a naming check. `Display` gives the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingVerdict {
    Conforms {
        name: String,
        context: NamingContext,
    },
    Violates {
        name: String,
        context: NamingContext,
    },
    UnknownContext {
        context: String,
    },
}

impl NamingVerdict {
    pub fn is_conforming(&self) -> bool {
        matches!(self, Self::Conforms { .. })
    }
}

impl fmt::Display for NamingVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conforms { name, context } => write!(
                f,
                "✅ '{name}' follows {} convention for {context}s.",
                context.style()
            ),
            Self::Violates { name, context } => {
                let style = context.style();
                write!(
                    f,
                    "❌ '{name}' does not follow {style} convention for {context}s.\n\nExpected format: {style}"
                )
            }
            Self::UnknownContext { context } => {
                let valid: Vec<&str> = NamingContext::ALL.iter().map(|c| c.as_str()).collect();
                write!(f, "Unknown context '{context}'. Use: {}", valid.join(", "))
            }
        }
    }
}

/// Compiled full-string patterns, one per style.
#[derive(Debug, Clone)]
pub struct NamingRules {
    rules: Vec<(NamingStyle, Regex)>,
}

impl NamingRules {
    pub fn new() -> Result<Self, KnowledgeError> {
        let styles = [
            NamingStyle::CamelCase,
            NamingStyle::PascalCase,
            NamingStyle::UpperSnakeCase,
            NamingStyle::KebabCase,
        ];
        let rules = styles
            .into_iter()
            .map(|style| Ok((style, Regex::new(style.pattern())?)))
            .collect::<Result<Vec<_>, KnowledgeError>>()?;
        Ok(Self { rules })
    }

    fn matches(&self, style: NamingStyle, name: &str) -> bool {
        self.rules
            .iter()
            .find(|(s, _)| *s == style)
            .is_some_and(|(_, re)| re.is_match(name))
    }

    /// Check `name` against the rule for `context` (case-insensitive).
    pub fn check(&self, name: &str, context: &str) -> NamingVerdict {
        let Some(parsed) = NamingContext::parse(context) else {
            return NamingVerdict::UnknownContext {
                context: context.to_lowercase(),
            };
        };

        if self.matches(parsed.style(), name) {
            NamingVerdict::Conforms {
                name: name.to_string(),
                context: parsed,
            }
        } else {
            NamingVerdict::Violates {
                name: name.to_string(),
                context: parsed,
            }
        }
    }
}
