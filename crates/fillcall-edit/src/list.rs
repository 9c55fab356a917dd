use fillcall_signature::ExistingArgument;

use crate::text::TextRange;

const INDENT_UNIT: &str = "    ";

/// Marker suffix appended to a synthesized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// Surfaces nullability ambiguity: "this value or null".
    OrNull,
    /// Marks the value as requiring explicit user confirmation.
    Bind,
}

impl Suffix {
    fn as_str(self) -> &'static str {
        match self {
            Suffix::OrNull => ".orNull()",
            Suffix::Bind => ".bind()",
        }
    }
}

/// A synthesized call-like placeholder expression, e.g. `positiveInt()`,
/// `enum<Color>()`, or `point()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthCall {
    /// Callee name; may be qualified until the shortening pass runs.
    pub callee: String,
    pub type_args: Vec<String>,
    pub args: ArgumentList,
    pub suffixes: Vec<Suffix>,
}

impl SynthCall {
    pub fn new(callee: impl Into<String>) -> Self {
        Self {
            callee: callee.into(),
            type_args: Vec::new(),
            args: ArgumentList::default(),
            suffixes: Vec::new(),
        }
    }
}

/// A synthesized lambda expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaValue {
    pub body: String,
    pub suffixes: Vec<Suffix>,
}

/// The value slot of one argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// Existing argument text, carried through untouched.
    Verbatim(String),
    Call(SynthCall),
    Lambda(LambdaValue),
}

/// One entry of a mutable argument list.
///
/// `value: None` renders as an empty expression slot after the name
/// (omit-default-values policy, or degraded synthesis).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: Option<String>,
    pub value: Option<ArgValue>,
    pub synthesized: bool,
}

impl Argument {
    pub fn existing(arg: &ExistingArgument) -> Self {
        Self {
            name: arg.name.clone(),
            value: arg.expression.clone().map(ArgValue::Verbatim),
            synthesized: false,
        }
    }
}

/// The mutable argument-list structure under edit.
///
/// Owned exclusively by the call site being fixed; `multiline` and
/// `trailing_comma` are rendering state the post-edit passes flip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList {
    pub arguments: Vec<Argument>,
    pub multiline: bool,
    pub trailing_comma: bool,
}

/// Offsets of one rendered top-level argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpan {
    /// Range of the rendered expression, absent for empty slots.
    pub expression: Option<TextRange>,
    /// Offset of the argument's end, before any following comma.
    pub end: usize,
    pub synthesized: bool,
}

/// A rendered argument list (parentheses included) plus per-argument spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
    pub text: String,
    pub arguments: Vec<ArgSpan>,
}

impl ArgumentList {
    /// Build the list from the call's current arguments.
    pub fn from_existing(arguments: &[ExistingArgument]) -> Self {
        Self {
            arguments: arguments.iter().map(Argument::existing).collect(),
            multiline: false,
            trailing_comma: false,
        }
    }

    /// Render to text, with `base_indent` being the indentation of the line
    /// holding the opening parenthesis.
    pub fn render(&self, base_indent: &str) -> RenderedList {
        let mut text = String::from("(");
        let mut spans = Vec::with_capacity(self.arguments.len());

        if self.arguments.is_empty() {
            text.push(')');
            return RenderedList {
                text,
                arguments: spans,
            };
        }

        let multiline = self.multiline;
        let inner_indent = format!("{base_indent}{INDENT_UNIT}");
        let last = self.arguments.len() - 1;

        for (index, argument) in self.arguments.iter().enumerate() {
            if multiline {
                text.push('\n');
                text.push_str(&inner_indent);
            }

            if let Some(name) = &argument.name {
                text.push_str(name);
                text.push_str(" = ");
            }

            let expression = argument.value.as_ref().map(|value| {
                let start = text.len();
                write_value(value, &inner_indent, &mut text);
                TextRange::new(start, text.len())
            });

            spans.push(ArgSpan {
                expression,
                end: text.len(),
                synthesized: argument.synthesized,
            });

            if index < last {
                text.push(',');
                if !multiline {
                    text.push(' ');
                }
            } else if self.trailing_comma {
                text.push(',');
            }
        }

        if multiline {
            text.push('\n');
            text.push_str(base_indent);
        }
        text.push(')');

        RenderedList {
            text,
            arguments: spans,
        }
    }
}

fn write_value(value: &ArgValue, indent: &str, out: &mut String) {
    match value {
        ArgValue::Verbatim(text) => out.push_str(text),
        ArgValue::Lambda(lambda) => {
            if lambda.body.is_empty() {
                out.push_str("{}");
            } else {
                out.push_str("{ ");
                out.push_str(&lambda.body);
                out.push_str(" }");
            }
            for suffix in &lambda.suffixes {
                out.push_str(suffix.as_str());
            }
        }
        ArgValue::Call(call) => {
            out.push_str(&call.callee);
            if !call.type_args.is_empty() {
                out.push('<');
                out.push_str(&call.type_args.join(", "));
                out.push('>');
            }
            write_nested_list(&call.args, indent, out);
            for suffix in &call.suffixes {
                out.push_str(suffix.as_str());
            }
        }
    }
}

fn write_nested_list(list: &ArgumentList, indent: &str, out: &mut String) {
    let rendered = list.render(indent);
    out.push_str(&rendered.text);
}
