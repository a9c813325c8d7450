//! Tests for the derived page view

use super::*;
use crate::encoding::StatementEncoding;
use crate::intake::CandidateFile;
use ledgerline_core::NotificationQueue;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn session() -> ImportSession {
    ImportSession::builder(Arc::new(NotificationQueue::new())).build()
}

#[test]
fn test_initial_page() {
    let session = session();
    let view = ImportPageView::derive(&session, &PageContext::default());

    assert_eq!(view.title, "Import Statements for HDFC");
    assert_eq!(
        view.drop_zone,
        DropZoneView {
            headline: "Drag and drop file to import".to_string(),
            picker_label: "Choose File",
            drag_active: false,
            has_selection: false,
        }
    );
    assert!(!view.next_enabled);
    assert_eq!(
        view.import_notice.as_deref(),
        Some("Bank statement imported till 28/01/2024")
    );
    assert_eq!(view.accept_filter, ".csv,.tsv,.xls,.xlsx,.ofx,.qif,.pdf");
    assert_eq!(view.tips, vec![DEFAULT_PAGE_TIP.to_string()]);
    assert_eq!(view.current_step().map(|s| s.label), Some("Configure"));
    assert_eq!(
        view.encoding_options
            .iter()
            .find(|o| o.selected)
            .map(|o| o.encoding),
        Some(StatementEncoding::Utf8)
    );
}

#[test]
fn test_selection_changes_drop_zone_and_enables_next() {
    let mut session = session();
    session.begin_drag();
    session
        .drop_files([CandidateFile::new("june.ofx", 300)])
        .unwrap();

    let view = ImportPageView::derive(&session, &PageContext::default());

    assert_eq!(view.drop_zone.headline, "june.ofx");
    assert_eq!(view.drop_zone.picker_label, "Change File");
    assert!(view.drop_zone.has_selection);
    assert!(!view.drop_zone.drag_active);
    assert!(view.next_enabled);
}

#[test]
fn test_drag_highlight_is_reported() {
    let mut session = session();
    session.begin_drag();

    let view = ImportPageView::derive(&session, &PageContext::default());

    assert!(view.drop_zone.drag_active);
}

#[test]
fn test_stepper_follows_wizard() {
    let mut session = session();
    session
        .submit_candidate(CandidateFile::new("x.csv", 1))
        .unwrap();
    session.advance().unwrap();

    let view = ImportPageView::derive(&session, &PageContext::default());

    assert_eq!(
        view.stepper,
        vec![
            StepperItem {
                ordinal: 1,
                label: "Configure",
                is_current: false,
                is_complete: true,
            },
            StepperItem {
                ordinal: 2,
                label: "Map Fields",
                is_current: true,
                is_complete: false,
            },
            StepperItem {
                ordinal: 3,
                label: "Preview",
                is_current: false,
                is_complete: false,
            },
        ]
    );
}

#[test]
fn test_context_fills_header_and_notice() {
    let session = session();
    let context = PageContext {
        account_name: "ICICI Savings".to_string(),
        statements_imported_through: NaiveDate::from_ymd_opt(2024, 1, 28),
        tips: Vec::new(),
    };

    let view = ImportPageView::derive(&session, &context);

    assert_eq!(view.title, "Import Statements for ICICI Savings");
    assert_eq!(
        view.import_notice.as_deref(),
        Some("Bank statement imported till 28/01/2024")
    );
    assert!(view.tips.is_empty());
    assert!(view.size_notice.contains("5 MB for PDF"));
}

#[test]
fn test_notice_hidden_without_import_date() {
    let session = session();
    let context = PageContext {
        statements_imported_through: None,
        ..PageContext::default()
    };

    let view = ImportPageView::derive(&session, &context);

    assert_eq!(view.import_notice, None);
}
