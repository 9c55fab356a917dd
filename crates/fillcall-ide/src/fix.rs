use fillcall_edit::{
    apply_arguments, synthesize_arguments, ArgumentList, EditContext, EditPolicy, NoShortening,
    PlaceholderRegion, ReferenceShortener, TextEdit, TextRange,
};
use fillcall_resolve::{underfilled_candidates, SymbolTable};
use fillcall_signature::{CallSite, CandidateSignature};

use crate::selection::{display_order, signature_labels};

/// Result of attempting to apply the fill-arguments fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixApplication {
    Applied(AppliedFix),
    /// Several candidates survive in an interactive context; the host shows
    /// the labels and calls [`FillArgumentsFix::apply_selected`] with the
    /// chosen index. A dismissed chooser simply never calls back.
    NeedsSelection(Vec<String>),
    /// Nothing to fill, or the call site went stale. No mutation happened.
    NothingToDo,
}

/// The whole multi-pass edit as one document mutation.
///
/// `edit` replaces the full argument-list range, so a host applying it in
/// one write action gets the entire fix as a single undoable step. `regions`
/// are caret stops in document offsets, present only for interactive
/// applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFix {
    pub edit: TextEdit,
    pub regions: Vec<PlaceholderRegion>,
}

/// The fill-arguments quick fix.
///
/// Resolution runs again at apply time: read-only symbol queries are safe to
/// re-run, and a call site invalidated since inspection must fail closed
/// rather than splice arguments into the wrong place.
pub struct FillArgumentsFix<'a> {
    symbols: &'a dyn SymbolTable,
    shortener: &'a dyn ReferenceShortener,
    policy: EditPolicy,
    context: EditContext,
}

impl<'a> FillArgumentsFix<'a> {
    pub fn new(symbols: &'a dyn SymbolTable, policy: EditPolicy, context: EditContext) -> Self {
        Self {
            symbols,
            shortener: &NoShortening,
            policy,
            context,
        }
    }

    /// Build a fix from the workspace configuration.
    pub fn from_config(
        symbols: &'a dyn SymbolTable,
        config: &fillcall_config::FillConfig,
        context: EditContext,
    ) -> Self {
        Self::new(symbols, config.fill, context)
    }

    /// Use the host's naming-resolution rules for the shortening pass.
    #[must_use]
    pub fn with_shortener(mut self, shortener: &'a dyn ReferenceShortener) -> Self {
        self.shortener = shortener;
        self
    }

    /// Apply the fix to `call`, whose parenthesized argument list occupies
    /// `list_range` (parentheses included) in `document`.
    ///
    /// One candidate, or any candidate in a non-interactive context, is
    /// applied immediately; several candidates in an interactive context
    /// come back as [`FixApplication::NeedsSelection`].
    pub fn apply(&self, document: &str, list_range: TextRange, call: &CallSite) -> FixApplication {
        let candidates = underfilled_candidates(call, self.symbols);
        if candidates.is_empty() {
            return FixApplication::NothingToDo;
        }
        if !argument_list_intact(document, list_range) {
            tracing::debug!(?list_range, "argument list went stale; aborting fix");
            return FixApplication::NothingToDo;
        }

        if candidates.len() == 1 || !self.context.interactive {
            return self.apply_candidate(document, list_range, call, &candidates[0]);
        }

        FixApplication::NeedsSelection(signature_labels(&display_order(candidates)))
    }

    /// Apply the candidate the user chose from the selection surface.
    ///
    /// `choice` indexes the label list returned by [`Self::apply`]. Stale
    /// indices and stale call sites are silent no-ops.
    pub fn apply_selected(
        &self,
        document: &str,
        list_range: TextRange,
        call: &CallSite,
        choice: usize,
    ) -> FixApplication {
        let candidates = display_order(underfilled_candidates(call, self.symbols));
        let Some(candidate) = candidates.get(choice) else {
            return FixApplication::NothingToDo;
        };
        if !argument_list_intact(document, list_range) {
            return FixApplication::NothingToDo;
        }
        self.apply_candidate(document, list_range, call, candidate)
    }

    fn apply_candidate(
        &self,
        document: &str,
        list_range: TextRange,
        call: &CallSite,
        candidate: &CandidateSignature,
    ) -> FixApplication {
        let synthesized = synthesize_arguments(candidate, call, &self.policy);
        let mut list = ArgumentList::from_existing(&call.arguments);

        let indent = line_indent(document, list_range.start);
        let sequenced = apply_arguments(
            &mut list,
            synthesized,
            &self.policy,
            self.shortener,
            &self.context,
            indent,
        );

        tracing::debug!(
            callee = %call.callee,
            candidate = %candidate.label(),
            "filled missing arguments"
        );

        let regions = sequenced
            .regions
            .into_iter()
            .map(|region| PlaceholderRegion {
                range: region.range.shifted(list_range.start),
                order: region.order,
            })
            .collect();

        FixApplication::Applied(AppliedFix {
            edit: TextEdit::replace(list_range, sequenced.text),
            regions,
        })
    }
}

/// The recorded range must still hold a parenthesized argument list;
/// anything else means the document changed under us.
fn argument_list_intact(document: &str, range: TextRange) -> bool {
    match document.get(range.start..range.end) {
        Some(slice) => slice.starts_with('(') && slice.ends_with(')') && slice.len() >= 2,
        None => false,
    }
}

/// Leading whitespace of the line containing `offset`.
fn line_indent(text: &str, offset: usize) -> &str {
    let line_start = match text[..offset.min(text.len())].rfind('\n') {
        Some(newline) => newline + 1,
        None => 0,
    };
    let bytes = text.as_bytes();
    let mut end = line_start;
    while end < offset && matches!(bytes[end], b' ' | b'\t') {
        end += 1;
    }
    &text[line_start..end]
}
