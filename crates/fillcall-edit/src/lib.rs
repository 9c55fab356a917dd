//! Argument synthesis and structural editing for under-filled calls.
//!
//! The pipeline is split the way the host boundary wants it: computing the
//! new argument-list structure is pure and testable
//! ([`synthesize_arguments`], [`apply_arguments`]), while applying the result
//! to a live document is a thin [`TextEdit`] at the end
//! ([`apply_text_edits`]). The four post-edit passes (line splitting,
//! trailing commas, reference shortening, placeholder sequencing) run in a
//! fixed order because each depends on the structural state left by the
//! previous one.

mod list;
mod passes;
mod policy;
mod synthesize;
mod text;

pub use list::{
    ArgSpan, ArgValue, Argument, ArgumentList, LambdaValue, RenderedList, Suffix, SynthCall,
};
pub use passes::{
    apply_arguments, EditContext, NoShortening, PlaceholderRegion, ReferenceShortener,
    SequencedEdit,
};
pub use policy::EditPolicy;
pub use synthesize::{synthesize_arguments, SynthesizedArgument};
pub use text::{apply_text_edits, EditError, TextEdit, TextRange};
