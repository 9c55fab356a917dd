//! Shared data model for the fill-arguments pipeline.
//!
//! Everything here is plain resolved metadata: the host's name resolution
//! produces [`CandidateSignature`] values for a call site, and the editor
//! supplies a [`CallSite`] snapshot of the argument list as it currently
//! stands. Both are read-only inputs for the resolver and synthesizer.

mod call;
mod signature;

pub use call::{CallSite, ExistingArgument};
pub use signature::{
    CallableKind, CandidateSignature, ParamType, ParameterSpec, SignatureOrigin, TypeCategory,
};
