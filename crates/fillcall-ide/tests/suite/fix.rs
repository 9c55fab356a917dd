use fillcall_edit::{apply_text_edits, EditContext, EditPolicy, TextRange};
use fillcall_ide::{
    applied_fix_to_code_action, inspect_call, regions_to_ranges, FillArgumentsFix,
    FixApplication, InspectionTarget,
};
use fillcall_resolve::StaticSymbolTable;
use fillcall_signature::{CallSite, CandidateSignature, ExistingArgument};
use pretty_assertions::assert_eq;

use crate::suite::{int_param, point_constructor, text_param};

#[test]
fn stale_call_site_fails_closed() {
    let symbols = StaticSymbolTable::new().with(point_constructor());
    let call = CallSite::new("Point");
    let fix = FillArgumentsFix::new(&symbols, EditPolicy::default(), EditContext::batch());

    // The recorded range no longer holds a parenthesized list.
    let outcome = fix.apply("val p = Poin", TextRange::new(5, 12), &call);
    assert_eq!(outcome, FixApplication::NothingToDo);

    let outcome = fix.apply("short", TextRange::new(5, 20), &call);
    assert_eq!(outcome, FixApplication::NothingToDo);
}

#[test]
fn fully_filled_call_is_not_offered_again() {
    let symbols = StaticSymbolTable::new().with(point_constructor());
    let filled = CallSite::new("Point").with_arguments(vec![
        ExistingArgument::named("x", "positiveInt().bind()"),
        ExistingArgument::named("y", "positiveInt().bind()"),
        ExistingArgument::named("label", "string().bind()"),
    ]);

    assert_eq!(
        inspect_call(&filled, &symbols, InspectionTarget::Any),
        None
    );
    let fix = FillArgumentsFix::new(&symbols, EditPolicy::default(), EditContext::batch());
    let document = "Point(x = positiveInt().bind(), y = positiveInt().bind(), label = string().bind())";
    let outcome = fix.apply(document, TextRange::new(5, document.len()), &filled);
    assert_eq!(outcome, FixApplication::NothingToDo);
}

#[test]
fn batch_context_applies_the_first_candidate_without_selection() {
    let symbols = StaticSymbolTable::new()
        .with(CandidateSignature::function("f", vec![int_param("a"), text_param("b")]))
        .with(CandidateSignature::function("f", vec![int_param("a")]));
    let document = "f()";
    let call = CallSite::new("f");
    let policy = EditPolicy {
        one_argument_per_line: false,
        ..EditPolicy::default()
    };

    let fix = FillArgumentsFix::new(&symbols, policy, EditContext::batch());
    let FixApplication::Applied(applied) = fix.apply(document, TextRange::new(1, 3), &call)
    else {
        panic!("batch mode should apply without a selection round-trip");
    };
    // First candidate in resolution order, not the display order.
    assert_eq!(
        applied.edit.replacement,
        "(a = positiveInt().bind(), b = string().bind())"
    );
}

#[test]
fn dismissed_selection_with_stale_choice_mutates_nothing() {
    let symbols = StaticSymbolTable::new()
        .with(CandidateSignature::function("f", vec![int_param("a"), text_param("b")]))
        .with(CandidateSignature::function("f", vec![int_param("a")]));
    let call = CallSite::new("f");
    let fix = FillArgumentsFix::new(
        &symbols,
        EditPolicy::default(),
        EditContext::interactive(),
    );
    assert_eq!(
        fix.apply_selected("f()", TextRange::new(1, 3), &call, 7),
        FixApplication::NothingToDo
    );
}

#[test]
fn trailing_comma_flag_controls_commas_independently_of_line_splitting() {
    let symbols = StaticSymbolTable::new().with(point_constructor());
    let call = CallSite::new("Point");
    let document = "Point()";
    let range = TextRange::new(5, 7);

    let comma_off = EditPolicy::default();
    let fix = FillArgumentsFix::new(&symbols, comma_off, EditContext::batch());
    let FixApplication::Applied(applied) = fix.apply(document, range, &call) else {
        panic!("expected the fix to apply");
    };
    assert!(!applied.edit.replacement.contains(",\n)"));

    let comma_on = EditPolicy {
        append_trailing_comma: true,
        ..EditPolicy::default()
    };
    let fix = FillArgumentsFix::new(&symbols, comma_on, EditContext::batch());
    let FixApplication::Applied(applied) = fix.apply(document, range, &call) else {
        panic!("expected the fix to apply");
    };
    assert!(applied.edit.replacement.ends_with(",\n)"));
}

#[test]
fn interactive_fix_rebases_caret_regions_to_document_offsets() {
    let symbols = StaticSymbolTable::new().with(point_constructor());
    let document = "    val p = Point()";
    let range = TextRange::new(17, 19);
    let call = CallSite::new("Point");
    let policy = EditPolicy {
        cycle_placeholders_after_edit: true,
        omit_default_values: true,
        one_argument_per_line: false,
        append_trailing_comma: true,
        ..EditPolicy::default()
    };

    let fix = FillArgumentsFix::new(&symbols, policy, EditContext::interactive());
    let FixApplication::Applied(applied) = fix.apply(document, range, &call) else {
        panic!("expected the fix to apply");
    };

    let after = apply_text_edits(document, std::slice::from_ref(&applied.edit)).unwrap();
    assert_eq!(after, "    val p = Point(x = , y = , label = ,)");

    assert_eq!(applied.regions.len(), 3);
    for (order, region) in applied.regions.iter().enumerate() {
        assert_eq!(region.order, order);
        assert!(region.range.is_empty(), "empty slots get zero-width carets");
        // Each caret point sits right before the comma closing its argument.
        assert_eq!(&after[region.range.start..region.range.start + 1], ",");
    }

    let ranges = regions_to_ranges(&after, &applied.regions);
    assert_eq!(ranges.len(), 3);
    assert_eq!(ranges[0].start.line, 0);
}

#[test]
fn applied_fix_converts_to_a_quickfix_code_action() {
    let symbols = StaticSymbolTable::new().with(point_constructor());
    let document = "Point()";
    let call = CallSite::new("Point");
    let fix = FillArgumentsFix::new(&symbols, EditPolicy::default(), EditContext::batch());
    let FixApplication::Applied(applied) = fix.apply(document, TextRange::new(5, 7), &call)
    else {
        panic!("expected the fix to apply");
    };

    let uri: lsp_types::Uri = "file:///test.kt".parse().expect("valid uri");
    let action = applied_fix_to_code_action(&uri, document, "Fill class constructor", &applied);
    assert_eq!(action.title, "Fill class constructor");
    assert_eq!(action.kind, Some(lsp_types::CodeActionKind::QUICKFIX));
    let edit = action.edit.expect("code action carries an edit");
    let changes = edit.changes.expect("changes map present");
    assert_eq!(changes[&uri].len(), 1);
}
