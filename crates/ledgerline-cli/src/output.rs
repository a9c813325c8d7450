//! Terminal rendering for the ledgerline binary

use comfy_table::{Table, presets::UTF8_FULL};
use ledgerline_core::{Notification, NotificationKind};
use ledgerline_import::{ImportPageView, StatementFormat};

pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{} MB", bytes / MIB)
    } else if bytes >= MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}

pub fn notification_line(notification: &Notification) -> String {
    let marker = match notification.kind {
        NotificationKind::Success => "ok",
        NotificationKind::Error => "error",
    };
    format!(
        "[{}] {}: {}",
        marker, notification.title, notification.description
    )
}

pub fn formats_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Extension", "Format", "Size ceiling"]);
    for format in StatementFormat::all() {
        table.add_row(vec![
            format.extension().to_string(),
            format.display_name().to_string(),
            format_size(format.declared_size_limit()),
        ]);
    }
    table
}

pub fn page_summary(view: &ImportPageView) -> String {
    let mut lines = vec![view.title.clone()];

    let stepper = view
        .stepper
        .iter()
        .map(|item| {
            let marker = if item.is_current {
                ">"
            } else if item.is_complete {
                "x"
            } else {
                " "
            };
            format!("[{}] {}. {}", marker, item.ordinal, item.label)
        })
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(stepper);

    if let Some(notice) = &view.import_notice {
        lines.push(notice.clone());
    }
    lines.push(format!(
        "File: {} ({})",
        view.drop_zone.headline, view.drop_zone.picker_label
    ));

    let encodings = view
        .encoding_options
        .iter()
        .map(|option| {
            if option.selected {
                format!("*{}", option.label)
            } else {
                option.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("Character encoding: {}", encodings));
    lines.push(format!(
        "Next: {}",
        if view.next_enabled { "enabled" } else { "disabled" }
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_size(1536 * 1024), "1.5 MB");
    }

    #[test]
    fn test_notification_line() {
        let line = notification_line(&Notification::error(
            "Invalid file type",
            "Please upload a supported bank statement file.",
        ));
        assert_eq!(
            line,
            "[error] Invalid file type: Please upload a supported bank statement file."
        );
    }

    #[test]
    fn test_formats_table_lists_every_format() {
        let rendered = formats_table().to_string();
        for format in StatementFormat::all() {
            assert!(rendered.contains(format.extension()));
        }
        assert!(rendered.contains("5 MB"));
    }
}
