use fillcall_resolve::{underfilled_candidates, SymbolTable};
use fillcall_signature::{CallSite, CallableKind};

/// Which callables an inspection reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectionTarget {
    Constructors,
    Functions,
    Any,
}

impl InspectionTarget {
    fn matches(self, kind: CallableKind) -> bool {
        match self {
            InspectionTarget::Constructors => kind == CallableKind::Constructor,
            InspectionTarget::Functions => kind == CallableKind::Function,
            InspectionTarget::Any => true,
        }
    }
}

/// A reported under-filled call. `message` doubles as the quick-fix prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub message: String,
}

/// Report `call` when at least one under-filled candidate matches `target`.
///
/// No candidates (or none of the right kind) is the quiet "nothing to do"
/// state: no problem, no fix offered.
pub fn inspect_call(
    call: &CallSite,
    symbols: &dyn SymbolTable,
    target: InspectionTarget,
) -> Option<Problem> {
    let candidates = underfilled_candidates(call, symbols);
    let matched = candidates.iter().find(|sig| target.matches(sig.kind))?;
    let message = match matched.kind {
        CallableKind::Constructor => "Fill class constructor".to_string(),
        CallableKind::Function => "Fill function".to_string(),
    };
    Some(Problem { message })
}
