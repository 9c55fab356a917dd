//! Call-site resolution and candidate filtering.
//!
//! Given a [`CallSite`] and whatever the host's name resolution can see for
//! its callee, this crate narrows the visible overloads down to the
//! candidates worth filling: source-defined signatures that declare strictly
//! more non-vararg parameters than the call currently supplies. Everything
//! here is read-only and side-effect-free, so a host may safely re-run
//! resolution right before applying a fix.

use fillcall_signature::{CallSite, CandidateSignature, SignatureOrigin};

/// Outcome of resolving a call's callee name.
///
/// `Resolved` is the statically unambiguous case; `Ambiguous` carries every
/// syntactically matching declaration reachable from the callee name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallResolution {
    Resolved(CandidateSignature),
    Ambiguous(Vec<CandidateSignature>),
    Unresolved,
}

impl CallResolution {
    fn into_signatures(self) -> Vec<CandidateSignature> {
        match self {
            CallResolution::Resolved(sig) => vec![sig],
            CallResolution::Ambiguous(sigs) => sigs,
            CallResolution::Unresolved => Vec::new(),
        }
    }
}

/// The host's symbol table, queried for the overloads visible at a call site.
pub trait SymbolTable {
    fn resolve_call(&self, call: &CallSite) -> CallResolution;
}

/// Filter the overloads visible at `call` down to the under-filled
/// candidates.
///
/// A candidate survives iff it is defined in introspectable source and its
/// non-vararg parameter count strictly exceeds the call's explicit argument
/// count. An unresolved callee or an empty survivor set is the ordinary
/// "nothing to do" state, not an error.
///
/// The returned order is resolution order; selection UIs re-sort for display.
pub fn underfilled_candidates(
    call: &CallSite,
    symbols: &dyn SymbolTable,
) -> Vec<CandidateSignature> {
    let argument_count = call.explicit_argument_count();
    let visible = symbols.resolve_call(call).into_signatures();
    let total = visible.len();

    let candidates: Vec<CandidateSignature> = visible
        .into_iter()
        .filter(|sig| {
            sig.origin == SignatureOrigin::Source
                && sig.non_vararg_param_count() > argument_count
        })
        .collect();

    tracing::debug!(
        callee = %call.callee,
        argument_count,
        visible = total,
        underfilled = candidates.len(),
        "filtered call candidates"
    );
    candidates
}

/// In-memory [`SymbolTable`] keyed by callee name.
///
/// Embedders without a real resolver (and this crate's tests) register
/// signatures up front; a single match resolves statically, several matches
/// surface as an ambiguous resolution.
#[derive(Debug, Default)]
pub struct StaticSymbolTable {
    overloads: std::collections::HashMap<String, Vec<CandidateSignature>>,
}

impl StaticSymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, signature: CandidateSignature) {
        self.overloads
            .entry(signature.name.clone())
            .or_default()
            .push(signature);
    }

    #[must_use]
    pub fn with(mut self, signature: CandidateSignature) -> Self {
        self.insert(signature);
        self
    }
}

impl SymbolTable for StaticSymbolTable {
    fn resolve_call(&self, call: &CallSite) -> CallResolution {
        match self.overloads.get(&call.callee) {
            None => CallResolution::Unresolved,
            Some(sigs) if sigs.len() == 1 => CallResolution::Resolved(sigs[0].clone()),
            Some(sigs) => CallResolution::Ambiguous(sigs.clone()),
        }
    }
}
