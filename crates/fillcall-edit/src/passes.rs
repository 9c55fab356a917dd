use once_cell::sync::Lazy;
use regex::Regex;

use crate::list::{ArgValue, Argument, ArgumentList, SynthCall};
use crate::policy::EditPolicy;
use crate::synthesize::SynthesizedArgument;
use crate::text::TextRange;

/// Host naming-resolution hook for the shortening pass.
///
/// Given a fully-qualified reference (`com.example.Color.RED`), return its
/// minimal unambiguous form, or `None` to leave it as written.
pub trait ReferenceShortener {
    fn shorten(&self, qualified: &str) -> Option<String>;
}

/// Leaves every reference fully qualified.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShortening;

impl ReferenceShortener for NoShortening {
    fn shorten(&self, _qualified: &str) -> Option<String> {
        None
    }
}

/// Whether an interactive caret is available.
///
/// Batch/headless applications run the same structural passes but never
/// register caret regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditContext {
    pub interactive: bool,
}

impl EditContext {
    pub fn interactive() -> Self {
        Self { interactive: true }
    }

    pub fn batch() -> Self {
        Self { interactive: false }
    }
}

/// A caret stop over the rendered text, visited in `order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderRegion {
    pub range: TextRange,
    pub order: usize,
}

/// The mutated list rendered to text, plus caret stops when interactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencedEdit {
    /// Replacement text for the whole argument list, parentheses included.
    pub text: String,
    pub regions: Vec<PlaceholderRegion>,
}

/// Splice `synthesized` into `list` and run the post-edit passes.
///
/// The passes are strictly ordered: line splitting changes what the
/// trailing-comma pass sees, shortening changes the text the placeholder
/// regions are measured against, and region registration must observe the
/// final state. `base_indent` is the indentation of the line holding the
/// call.
pub fn apply_arguments(
    list: &mut ArgumentList,
    synthesized: Vec<SynthesizedArgument>,
    policy: &EditPolicy,
    shortener: &dyn ReferenceShortener,
    ctx: &EditContext,
    base_indent: &str,
) -> SequencedEdit {
    let added = synthesized.len();
    for argument in synthesized {
        list.arguments.push(Argument {
            name: Some(argument.name),
            value: argument.value,
            synthesized: true,
        });
    }
    tracing::debug!(added, total = list.arguments.len(), "spliced synthesized arguments");

    // 1. Put arguments on separate lines.
    if policy.one_argument_per_line {
        split_lines(list);
    }

    // 2. Add trailing commas.
    if policy.append_trailing_comma {
        append_trailing_commas(list);
    }

    // 3. Shorten references introduced by synthesis.
    //
    // Must run after line splitting so region offsets below measure the
    // final text.
    shorten_references(list, shortener);

    let rendered = list.render(base_indent);

    // 4. Register caret stops, final state only.
    let mut regions = Vec::new();
    if ctx.interactive && policy.cycle_placeholders_after_edit {
        for span in rendered.arguments.iter().filter(|span| span.synthesized) {
            let range = span
                .expression
                .unwrap_or_else(|| TextRange::empty_at(span.end));
            regions.push(PlaceholderRegion {
                range,
                order: regions.len(),
            });
        }
    }

    SequencedEdit {
        text: rendered.text,
        regions,
    }
}

/// Pass 1: mark the outer list and every non-empty nested list introduced by
/// synthesis as multiline. Empty lists stay untouched.
fn split_lines(list: &mut ArgumentList) {
    if !list.arguments.is_empty() {
        list.multiline = true;
    }
    for_each_synthesized_nested_list(list, &mut |nested| {
        if !nested.arguments.is_empty() {
            nested.multiline = true;
        }
    });
}

/// Pass 2: terminate the outer list and synthesized nested lists with a
/// comma when non-empty and not already terminated.
fn append_trailing_commas(list: &mut ArgumentList) {
    if !list.arguments.is_empty() && !list.trailing_comma {
        list.trailing_comma = true;
    }
    for_each_synthesized_nested_list(list, &mut |nested| {
        if !nested.arguments.is_empty() && !nested.trailing_comma {
            nested.trailing_comma = true;
        }
    });
}

fn for_each_synthesized_nested_list(
    list: &mut ArgumentList,
    f: &mut dyn FnMut(&mut ArgumentList),
) {
    for argument in &mut list.arguments {
        if !argument.synthesized {
            continue;
        }
        if let Some(ArgValue::Call(call)) = argument.value.as_mut() {
            visit_call_lists(call, f);
        }
    }
}

fn visit_call_lists(call: &mut SynthCall, f: &mut dyn FnMut(&mut ArgumentList)) {
    for argument in &mut call.args.arguments {
        if let Some(ArgValue::Call(inner)) = argument.value.as_mut() {
            visit_call_lists(inner, f);
        }
    }
    f(&mut call.args);
}

/// Pass 3: shorten qualified references introduced by synthesis — callees,
/// type arguments, and qualified names inside synthesized lambda bodies.
fn shorten_references(list: &mut ArgumentList, shortener: &dyn ReferenceShortener) {
    for argument in &mut list.arguments {
        if !argument.synthesized {
            continue;
        }
        if let Some(value) = argument.value.as_mut() {
            shorten_value(value, shortener);
        }
    }
}

fn shorten_value(value: &mut ArgValue, shortener: &dyn ReferenceShortener) {
    match value {
        ArgValue::Verbatim(_) => {}
        ArgValue::Lambda(lambda) => {
            lambda.body = shorten_in_text(&lambda.body, shortener);
        }
        ArgValue::Call(call) => shorten_call(call, shortener),
    }
}

fn shorten_call(call: &mut SynthCall, shortener: &dyn ReferenceShortener) {
    if call.callee.contains('.') {
        if let Some(short) = shortener.shorten(&call.callee) {
            call.callee = short;
        }
    }
    for type_arg in &mut call.type_args {
        if type_arg.contains('.') {
            if let Some(short) = shortener.shorten(type_arg) {
                *type_arg = short;
            }
        }
    }
    for argument in &mut call.args.arguments {
        if let Some(value) = argument.value.as_mut() {
            shorten_value(value, shortener);
        }
    }
}

static QUALIFIED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)+\b")
        .expect("valid qualified-name regex")
});

fn shorten_in_text(text: &str, shortener: &dyn ReferenceShortener) -> String {
    QUALIFIED_NAME
        .replace_all(text, |captures: &regex::Captures<'_>| {
            let qualified = &captures[0];
            shortener
                .shorten(qualified)
                .unwrap_or_else(|| qualified.to_string())
        })
        .into_owned()
}
