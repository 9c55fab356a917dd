//! Quick-fix orchestration for filling missing call arguments.
//!
//! The pipeline: an inspection flags an under-filled call
//! ([`inspect_call`]); applying the fix re-resolves the candidates, lets a
//! selection UI pick one when several survive, synthesizes the missing
//! arguments, and hands the host a single text edit plus caret-stop regions
//! ([`FillArgumentsFix`]). Every boundary condition is a defined no-op: a
//! stale call site, a dismissed chooser, or an empty candidate set mutates
//! nothing.

mod fix;
mod inspect;
mod lsp;
mod selection;

pub use fix::{AppliedFix, FillArgumentsFix, FixApplication};
pub use inspect::{inspect_call, InspectionTarget, Problem};
pub use lsp::{applied_fix_to_code_action, regions_to_ranges};
pub use selection::{display_order, signature_labels};
