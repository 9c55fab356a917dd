use std::collections::HashMap;

use lsp_types::{
    CodeAction, CodeActionKind, Position, Range, TextEdit as LspTextEdit, Uri,
    WorkspaceEdit as LspWorkspaceEdit,
};

use fillcall_edit::PlaceholderRegion;

use crate::fix::AppliedFix;

/// Convert an applied fix into an LSP code action against `uri`.
///
/// `document` must be the text the fix was computed against; positions are
/// measured in UTF-16 code units as LSP requires.
pub fn applied_fix_to_code_action(
    uri: &Uri,
    document: &str,
    title: impl Into<String>,
    fix: &AppliedFix,
) -> CodeAction {
    let mut changes: HashMap<Uri, Vec<LspTextEdit>> = HashMap::new();
    changes.insert(
        uri.clone(),
        vec![LspTextEdit {
            range: Range {
                start: offset_to_position(document, fix.edit.range.start),
                end: offset_to_position(document, fix.edit.range.end),
            },
            new_text: fix.edit.replacement.clone(),
        }],
    );

    CodeAction {
        title: title.into(),
        kind: Some(CodeActionKind::QUICKFIX),
        edit: Some(LspWorkspaceEdit {
            changes: Some(changes),
            document_changes: None,
            change_annotations: None,
        }),
        command: None,
        diagnostics: None,
        is_preferred: Some(true),
        disabled: None,
        data: None,
    }
}

/// Convert caret-stop regions to LSP ranges over the document as it reads
/// after the fix is applied.
pub fn regions_to_ranges(document_after: &str, regions: &[PlaceholderRegion]) -> Vec<Range> {
    regions
        .iter()
        .map(|region| Range {
            start: offset_to_position(document_after, region.range.start),
            end: offset_to_position(document_after, region.range.end),
        })
        .collect()
}

fn offset_to_position(text: &str, offset: usize) -> Position {
    let mut line: u32 = 0;
    let mut col_utf16: u32 = 0;

    let mut i = 0;
    for ch in text.chars() {
        if i >= offset {
            break;
        }

        if ch == '\n' {
            line += 1;
            col_utf16 = 0;
        } else {
            col_utf16 += ch.len_utf16() as u32;
        }

        i += ch.len_utf8();
    }

    Position {
        line,
        character: col_utf16,
    }
}
