//! Format contacts, search results, the chain visualization and notices as text.

use crate::config::DisplayConfig;
use crate::directory::visualization::render_line;
use crate::directory::VizToken;
use crate::session::{Notice, NoticeLevel, SearchHit};
use crate::types::Contact;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn contact_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Phone", "Email"]);
    table
}

/// Format the full contact list as a table.
pub fn format_contacts_text(contacts: &[&Contact], display: &DisplayConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Contacts ({})", contacts.len()))
    ));
    if contacts.is_empty() {
        out.push_str("No contacts in the book.\n");
        return out;
    }
    let mut table = contact_table();
    for contact in contacts {
        table.add_row(vec![
            contact.name.as_str(),
            contact.phone.as_str(),
            contact.email_or(&display.missing_email),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

fn match_label(hit: &SearchHit<'_>) -> &'static str {
    match (hit.name_match, hit.phone_match) {
        (true, true) => "name+phone",
        (true, false) => "name",
        (false, true) => "phone",
        // exact-mode hits always match on one of the two
        (false, false) => "-",
    }
}

/// Format search hits, or a "nothing found" message.
pub fn format_search_text(hits: &[SearchHit<'_>], display: &DisplayConfig) -> String {
    if hits.is_empty() {
        return "No contacts found.\n".to_string();
    }
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Search results ({})", hits.len()))
    ));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Phone", "Email", "Match"]);
    for hit in hits {
        table.add_row(vec![
            hit.contact.name.as_str(),
            hit.contact.phone.as_str(),
            hit.contact.email_or(&display.missing_email),
            match_label(hit),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// Format the chain order on one line.
pub fn format_visualization_text(tokens: &[VizToken], display: &DisplayConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Linked list")));
    if tokens.is_empty() {
        out.push_str("Empty list\n");
        return out;
    }
    out.push_str(&render_line(tokens, &display.separator));
    out.push('\n');
    out
}

/// Format a notice with a level marker, colored by level.
pub fn format_notice(notice: &Notice) -> String {
    let text = match notice.level {
        NoticeLevel::Success => format!("✔ {}", notice.message),
        NoticeLevel::Warning => format!("⚠ {}", notice.message),
        NoticeLevel::Danger => format!("✖ {}", notice.message),
        NoticeLevel::Info => format!("ℹ {}", notice.message),
    };
    match notice.level {
        NoticeLevel::Success => text.green().to_string(),
        NoticeLevel::Warning => text.yellow().to_string(),
        NoticeLevel::Danger => text.red().to_string(),
        NoticeLevel::Info => text.blue().to_string(),
    }
}
