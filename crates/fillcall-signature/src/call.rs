use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One argument already present in the call's parenthesized list.
///
/// Position is the index in [`CallSite::arguments`]. `expression` is the
/// argument's current text, if the host can supply it; it is never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExistingArgument {
    /// Explicit argument name, when the argument is named (`name = expr`).
    pub name: Option<String>,
    pub expression: Option<String>,
}

impl ExistingArgument {
    pub fn positional(expression: impl Into<String>) -> Self {
        Self {
            name: None,
            expression: Some(expression.into()),
        }
    }

    pub fn named(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            expression: Some(expression.into()),
        }
    }

    #[must_use]
    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }
}

/// Snapshot of a call expression's argument state before synthesis.
///
/// `arguments` covers the parenthesized list only; a single lambda supplied
/// outside the parentheses is recorded in `trailing_lambda`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CallSite {
    pub callee: String,
    pub arguments: Vec<ExistingArgument>,
    pub trailing_lambda: bool,
}

impl CallSite {
    pub fn new(callee: impl Into<String>) -> Self {
        Self {
            callee: callee.into(),
            arguments: Vec::new(),
            trailing_lambda: false,
        }
    }

    #[must_use]
    pub fn with_arguments(mut self, arguments: Vec<ExistingArgument>) -> Self {
        self.arguments = arguments;
        self
    }

    #[must_use]
    pub fn with_trailing_lambda(mut self) -> Self {
        self.trailing_lambda = true;
        self
    }

    /// Number of explicit arguments at the call site.
    ///
    /// A trailing lambda counts as an explicit argument here, matching how
    /// candidate filtering measures "under-filled".
    #[must_use]
    pub fn explicit_argument_count(&self) -> usize {
        self.arguments.len() + usize::from(self.trailing_lambda)
    }

    /// Whether any existing argument already names `name`, regardless of its
    /// position in the list.
    #[must_use]
    pub fn has_named_argument(&self, name: &str) -> bool {
        self.arguments
            .iter()
            .any(|arg| arg.name.as_deref() == Some(name))
    }
}
