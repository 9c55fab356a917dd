use fillcall_edit::{apply_text_edits, EditContext, EditPolicy, TextRange};
use fillcall_ide::{FillArgumentsFix, FixApplication};
use fillcall_resolve::StaticSymbolTable;
use fillcall_signature::{
    CallSite, CandidateSignature, ExistingArgument, ParamType, ParameterSpec, TypeCategory,
};
use pretty_assertions::assert_eq;

use crate::suite::{int_param, point_constructor, text_param};

fn list_range(document: &str) -> TextRange {
    let start = document.find('(').expect("opening paren in fixture");
    let end = document.rfind(')').expect("closing paren in fixture") + 1;
    TextRange::new(start, end)
}

#[test]
fn fills_point_constructor_with_placeholders() {
    let symbols = StaticSymbolTable::new().with(point_constructor());
    let document = "val p = Point()";
    let call = CallSite::new("Point");

    let fix = FillArgumentsFix::new(&symbols, EditPolicy::default(), EditContext::batch());
    let FixApplication::Applied(applied) = fix.apply(document, list_range(document), &call)
    else {
        panic!("expected the fix to apply");
    };

    let after = apply_text_edits(document, std::slice::from_ref(&applied.edit)).unwrap();
    assert_eq!(
        after,
        "val p = Point(\n    x = positiveInt().bind(),\n    y = positiveInt().bind(),\n    label = string().bind()\n)"
    );
}

#[test]
fn skip_defaults_policy_leaves_label_out_of_point() {
    let symbols = StaticSymbolTable::new().with(point_constructor());
    let document = "val p = Point()";
    let call = CallSite::new("Point");
    let policy = EditPolicy {
        skip_parameters_with_defaults: true,
        one_argument_per_line: false,
        ..EditPolicy::default()
    };

    let fix = FillArgumentsFix::new(&symbols, policy, EditContext::batch());
    let FixApplication::Applied(applied) = fix.apply(document, list_range(document), &call)
    else {
        panic!("expected the fix to apply");
    };

    let after = apply_text_edits(document, std::slice::from_ref(&applied.edit)).unwrap();
    assert_eq!(
        after,
        "val p = Point(x = positiveInt().bind(), y = positiveInt().bind())"
    );
}

#[test]
fn trailing_lambda_satisfies_the_last_function_parameter() {
    let symbols = StaticSymbolTable::new().with(CandidateSignature::function(
        "build",
        vec![
            text_param("name"),
            ParameterSpec::new(
                "children",
                ParamType::new(TypeCategory::List, "List<Node>"),
            )
            .with_default(),
            ParameterSpec::new("onClick", ParamType::new(TypeCategory::Function, "() -> Unit")),
        ],
    ));
    let document = "build(\"root\") { }";
    let call = CallSite::new("build")
        .with_arguments(vec![ExistingArgument::positional("\"root\"")])
        .with_trailing_lambda();
    let policy = EditPolicy {
        one_argument_per_line: false,
        ..EditPolicy::default()
    };

    let range = TextRange::new(5, 13); // ("root")
    let fix = FillArgumentsFix::new(&symbols, policy, EditContext::batch());
    let FixApplication::Applied(applied) = fix.apply(document, range, &call) else {
        panic!("expected the fix to apply");
    };

    assert_eq!(applied.edit.replacement, "(\"root\", children = listOf().bind())");
    let after = apply_text_edits(document, std::slice::from_ref(&applied.edit)).unwrap();
    assert_eq!(after, "build(\"root\", children = listOf().bind()) { }");
}

#[test]
fn ambiguous_overloads_surface_ordered_labels() {
    let symbols = StaticSymbolTable::new()
        .with(CandidateSignature::function("f", vec![int_param("a"), text_param("b")]))
        .with(CandidateSignature::function("f", vec![int_param("a")]));
    let document = "f()";
    let call = CallSite::new("f");

    let fix = FillArgumentsFix::new(
        &symbols,
        EditPolicy::default(),
        EditContext::interactive(),
    );
    let FixApplication::NeedsSelection(labels) = fix.apply(document, list_range(document), &call)
    else {
        panic!("expected a selection request");
    };
    assert_eq!(labels, vec!["f(a: Int)", "f(a: Int, b: String)"]);

    let FixApplication::Applied(applied) =
        fix.apply_selected(document, list_range(document), &call, 1)
    else {
        panic!("expected the chosen candidate to apply");
    };
    let after = apply_text_edits(document, std::slice::from_ref(&applied.edit)).unwrap();
    assert_eq!(
        after,
        "f(\n    a = positiveInt().bind(),\n    b = string().bind()\n)"
    );
}

#[test]
fn nullable_parameter_gets_a_distinct_or_null_form() {
    let symbols = StaticSymbolTable::new().with(CandidateSignature::function(
        "greet",
        vec![
            text_param("greeting"),
            ParameterSpec::new(
                "name",
                ParamType::new(TypeCategory::Text, "String").nullable(),
            ),
        ],
    ));
    let document = "greet()";
    let call = CallSite::new("greet");
    let policy = EditPolicy {
        one_argument_per_line: false,
        ..EditPolicy::default()
    };

    let fix = FillArgumentsFix::new(&symbols, policy, EditContext::batch());
    let FixApplication::Applied(applied) = fix.apply(document, list_range(document), &call)
    else {
        panic!("expected the fix to apply");
    };
    assert_eq!(
        applied.edit.replacement,
        "(greeting = string().bind(), name = string().orNull().bind())"
    );
}

#[test]
fn named_duplicate_and_vararg_leave_exactly_one_slot_to_fill() {
    let symbols = StaticSymbolTable::new().with(CandidateSignature::function(
        "emit",
        vec![
            int_param("a"),
            int_param("b"),
            ParameterSpec::new("rest", ParamType::new(TypeCategory::Int, "Int")).vararg(),
        ],
    ));
    let document = "emit(a = 1)";
    let call = CallSite::new("emit").with_arguments(vec![ExistingArgument::named("a", "1")]);
    let policy = EditPolicy {
        one_argument_per_line: false,
        ..EditPolicy::default()
    };

    let fix = FillArgumentsFix::new(&symbols, policy, EditContext::batch());
    let FixApplication::Applied(applied) = fix.apply(document, list_range(document), &call)
    else {
        panic!("expected the fix to apply");
    };
    assert_eq!(applied.edit.replacement, "(a = 1, b = positiveInt().bind())");
}

#[test]
fn existing_named_argument_is_never_duplicated() {
    let symbols = StaticSymbolTable::new().with(point_constructor());
    let document = "Point(y = 2)";
    let call =
        CallSite::new("Point").with_arguments(vec![ExistingArgument::named("y", "2")]);
    let policy = EditPolicy {
        one_argument_per_line: false,
        ..EditPolicy::default()
    };

    let fix = FillArgumentsFix::new(&symbols, policy, EditContext::batch());
    let FixApplication::Applied(applied) = fix.apply(document, list_range(document), &call)
    else {
        panic!("expected the fix to apply");
    };
    let after = apply_text_edits(document, std::slice::from_ref(&applied.edit)).unwrap();
    assert_eq!(
        after,
        "Point(y = 2, x = positiveInt().bind(), label = string().bind())"
    );
}
