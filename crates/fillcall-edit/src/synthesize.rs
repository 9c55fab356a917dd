use fillcall_signature::{CallSite, CandidateSignature, ParamType, TypeCategory};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::list::{ArgValue, LambdaValue, Suffix, SynthCall};
use crate::policy::EditPolicy;

/// One argument to splice into the call, always named so insertion order
/// stays visually unambiguous regardless of where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedArgument {
    pub name: String,
    /// `None` renders as an empty slot the user fills in manually.
    pub value: Option<ArgValue>,
}

/// Compute the arguments missing from `call` for the chosen `candidate`.
///
/// Walks parameters in declaration order and skips, in this order: the last
/// parameter when a trailing lambda already satisfies it, positions covered
/// by a positional existing argument (positional arguments are contiguous
/// from the start and never touched), names already used by an existing
/// named argument, varargs (arity is caller-determined), and parameters with
/// defaults when the policy says so. Synthesis never aborts partway; a
/// parameter whose placeholder cannot be expressed degrades to an empty
/// named slot.
pub fn synthesize_arguments(
    candidate: &CandidateSignature,
    call: &CallSite,
    policy: &EditPolicy,
) -> Vec<SynthesizedArgument> {
    let last_index = candidate.params.len().wrapping_sub(1);
    let mut out = Vec::new();

    for (index, param) in candidate.params.iter().enumerate() {
        if call.trailing_lambda
            && index == last_index
            && param.ty.category == TypeCategory::Function
        {
            continue;
        }
        if index < call.arguments.len() && !call.arguments[index].is_named() {
            continue;
        }
        if call.has_named_argument(&param.name) {
            continue;
        }
        if param.is_vararg {
            continue;
        }
        if policy.skip_parameters_with_defaults && param.has_default {
            continue;
        }

        let value = if policy.omit_default_values {
            None
        } else {
            placeholder_value(&param.ty)
        };
        out.push(SynthesizedArgument {
            name: param.name.clone(),
            value,
        });
    }

    out
}

/// Fixed type-category → placeholder mapping.
///
/// Every value carries the `.bind()` confirmation marker; nullable types
/// additionally get `.orNull()` (function types excepted — a lambda has no
/// or-null form here). Returns `None` when the fallback callee fails
/// identifier validation, degrading that argument to an empty slot.
fn placeholder_value(ty: &ParamType) -> Option<ArgValue> {
    let mut call = match ty.category {
        TypeCategory::Boolean => SynthCall::new("boolean"),
        TypeCategory::Char => SynthCall::new("char"),
        TypeCategory::Double => SynthCall::new("positiveDouble"),
        TypeCategory::Float => SynthCall::new("positiveFloat"),
        TypeCategory::Int => SynthCall::new("positiveInt"),
        TypeCategory::Long => SynthCall::new("positiveLong"),
        TypeCategory::Short => SynthCall::new("positiveShort"),
        TypeCategory::Text => SynthCall::new("string"),
        TypeCategory::List => SynthCall::new("listOf"),
        TypeCategory::Set => SynthCall::new("setOf"),
        TypeCategory::Map => SynthCall::new("mapOf"),
        TypeCategory::Enum => {
            let mut call = SynthCall::new("enum");
            call.type_args = vec![ty.name.clone()];
            call
        }
        TypeCategory::Function => {
            return Some(ArgValue::Lambda(LambdaValue {
                body: String::new(),
                suffixes: vec![Suffix::Bind],
            }));
        }
        TypeCategory::Class => {
            let callee = lower_camel(ty.simple_name());
            if !is_identifier(&callee) {
                return None;
            }
            SynthCall::new(callee)
        }
    };

    if ty.nullable {
        call.suffixes.push(Suffix::OrNull);
    }
    call.suffixes.push(Suffix::Bind);
    Some(ArgValue::Call(call))
}

/// Lower-case the first character, leaving the rest as-is.
fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"));

fn is_identifier(text: &str) -> bool {
    IDENTIFIER.is_match(text)
}
