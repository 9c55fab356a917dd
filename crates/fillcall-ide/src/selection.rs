use fillcall_signature::CandidateSignature;

/// Order candidates for a selection UI: ascending parameter count, ties
/// keeping resolution order.
pub fn display_order(mut candidates: Vec<CandidateSignature>) -> Vec<CandidateSignature> {
    candidates.sort_by_key(|sig| sig.params.len());
    candidates
}

/// Human-readable labels for the selection surface, in display order.
pub fn signature_labels(candidates: &[CandidateSignature]) -> Vec<String> {
    candidates.iter().map(CandidateSignature::label).collect()
}
