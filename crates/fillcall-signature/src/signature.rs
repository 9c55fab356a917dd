use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Semantic category of a parameter's declared type.
///
/// Resolution classifies each parameter into one of these buckets; the
/// synthesizer maps each bucket to a placeholder expression. `Class` is the
/// fallback for any named type without a more specific rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TypeCategory {
    Boolean,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    /// String and char-sequence types.
    Text,
    List,
    Set,
    Map,
    Enum,
    /// Function/lambda types.
    Function,
    /// Any other named class type.
    Class,
}

/// A parameter's declared type as resolution reported it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ParamType {
    pub category: TypeCategory,
    /// Display name, possibly qualified (e.g. `com.example.Color`).
    pub name: String,
    pub nullable: bool,
}

impl ParamType {
    pub fn new(category: TypeCategory, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            nullable: false,
        }
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// The unqualified portion of the type name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// One declared parameter of a candidate signature.
///
/// Declaration order is the parameter's position in
/// [`CandidateSignature::params`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ParameterSpec {
    pub name: String,
    pub ty: ParamType,
    /// Whether the declaration carries a default value.
    pub has_default: bool,
    pub is_vararg: bool,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, ty: ParamType) -> Self {
        Self {
            name: name.into(),
            ty,
            has_default: false,
            is_vararg: false,
        }
    }

    #[must_use]
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    #[must_use]
    pub fn vararg(mut self) -> Self {
        self.is_vararg = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CallableKind {
    Constructor,
    Function,
}

/// Where a candidate declaration comes from.
///
/// `External` marks binary/foreign declarations the tool cannot introspect
/// structurally; their default-value and vararg metadata may be incomplete,
/// so they are never offered as fill targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SignatureOrigin {
    Source,
    External,
}

/// A resolved callable signature visible at a call site.
///
/// `name` is the display name: the class name for constructors, the function
/// name otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CandidateSignature {
    pub name: String,
    pub kind: CallableKind,
    pub origin: SignatureOrigin,
    pub params: Vec<ParameterSpec>,
}

impl CandidateSignature {
    pub fn function(name: impl Into<String>, params: Vec<ParameterSpec>) -> Self {
        Self {
            name: name.into(),
            kind: CallableKind::Function,
            origin: SignatureOrigin::Source,
            params,
        }
    }

    pub fn constructor(name: impl Into<String>, params: Vec<ParameterSpec>) -> Self {
        Self {
            name: name.into(),
            kind: CallableKind::Constructor,
            origin: SignatureOrigin::Source,
            params,
        }
    }

    #[must_use]
    pub fn external(mut self) -> Self {
        self.origin = SignatureOrigin::External;
        self
    }

    #[must_use]
    pub fn non_vararg_param_count(&self) -> usize {
        self.params.iter().filter(|p| !p.is_vararg).count()
    }

    /// Human-readable label for selection UIs: `Name(param: Type, ...)`.
    #[must_use]
    pub fn label(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty.name))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({params})", self.name)
    }
}
