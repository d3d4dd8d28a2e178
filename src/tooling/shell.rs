//! Interactive shell
//!
//! Menu-and-form front end over a [`ContactBook`]. Every action maps onto one
//! session operation; rendering goes through `tooling::format`.

use crate::config::DisplayConfig;
use crate::error::ApiError;
use crate::session::{Confirmer, ContactBook, ContactForm, Notice, SearchOutcome};
use crate::tooling::format::{
    format_contacts_text, format_notice, format_search_text, format_visualization_text,
};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    Search,
    Edit,
    Delete,
    List,
    Visualize,
    Quit,
}

const MENU: [(MenuAction, &str); 7] = [
    (MenuAction::Add, "Add contact"),
    (MenuAction::Search, "Search"),
    (MenuAction::Edit, "Edit contact"),
    (MenuAction::Delete, "Delete contact"),
    (MenuAction::List, "List contacts"),
    (MenuAction::Visualize, "Show linked list"),
    (MenuAction::Quit, "Quit"),
];

/// Confirmation through a yes/no terminal prompt, defaulting to "no"
pub struct PromptConfirm<'t> {
    theme: &'t ColorfulTheme,
}

impl Confirmer for PromptConfirm<'_> {
    fn confirm(&mut self, prompt: &str) -> Result<bool, ApiError> {
        Ok(Confirm::with_theme(self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}

/// Run the shell until the user quits. Returns a closing summary.
pub fn run(book: &mut ContactBook, display: &DisplayConfig) -> Result<String, ApiError> {
    let theme = ColorfulTheme::default();
    render_overview(book, display);

    loop {
        let labels: Vec<&str> = MENU.iter().map(|(_, label)| *label).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt(format!("Contacts: {}", book.count()))
            .items(&labels)
            .default(0)
            .interact()?;
        let action = MENU[choice].0;
        debug!(?action, "menu action selected");

        match action {
            MenuAction::Add => {
                let form = prompt_form(&theme, &ContactForm::default())?;
                if report(book.submit(&form)) {
                    render_overview(book, display);
                }
            }
            MenuAction::Search => {
                let term: String = Input::with_theme(&theme)
                    .with_prompt("Search by name or phone")
                    .allow_empty(true)
                    .interact_text()?;
                let include_similar = Confirm::with_theme(&theme)
                    .with_prompt("Include similar names?")
                    .default(true)
                    .interact()?;
                match book.search(&term, include_similar) {
                    SearchOutcome::Cleared => {}
                    SearchOutcome::Hits(hits) => print!("{}", format_search_text(&hits, display)),
                }
            }
            MenuAction::Edit => {
                if let Some(name) = pick_contact(&theme, book, "Contact to edit")? {
                    edit_contact(&theme, book, &name)?;
                    render_overview(book, display);
                }
            }
            MenuAction::Delete => {
                if let Some(name) = pick_contact(&theme, book, "Contact to delete")? {
                    let mut confirmer = PromptConfirm { theme: &theme };
                    match book.delete(&name, &mut confirmer) {
                        Ok(Some(notice)) => {
                            println!("{}", format_notice(&notice));
                            render_overview(book, display);
                        }
                        Ok(None) => {}
                        Err(e) => println!("{}", format_notice(&Notice::from(&e))),
                    }
                }
            }
            MenuAction::List => print!("{}", format_contacts_text(&book.contacts(), display)),
            MenuAction::Visualize => {
                print!("{}", format_visualization_text(&book.visualization(), display))
            }
            MenuAction::Quit => break,
        }
    }

    Ok(format!(
        "Goodbye. {} contact(s) discarded with this session.",
        book.count()
    ))
}

/// Edit mode: prefilled form, then update or cancel.
fn edit_contact(theme: &ColorfulTheme, book: &mut ContactBook, name: &str) -> Result<(), ApiError> {
    let current = match book.begin_edit(name) {
        Ok((form, notice)) => {
            println!("{}", format_notice(&notice));
            form
        }
        Err(e) => {
            println!("{}", format_notice(&Notice::from(&e)));
            return Ok(());
        }
    };

    let form = prompt_form(theme, &current)?;
    let apply = Select::with_theme(theme)
        .items(&["Update", "Cancel"])
        .default(0)
        .interact()?;
    if apply == 0 {
        report(book.submit(&form));
    } else {
        println!("{}", format_notice(&book.cancel_edit()));
    }
    Ok(())
}

fn prompt_form(theme: &ColorfulTheme, initial: &ContactForm) -> Result<ContactForm, ApiError> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Name")
        .with_initial_text(initial.name.clone())
        .allow_empty(true)
        .interact_text()?;
    let phone: String = Input::with_theme(theme)
        .with_prompt("Phone")
        .with_initial_text(initial.phone.clone())
        .allow_empty(true)
        .interact_text()?;
    let email: String = Input::with_theme(theme)
        .with_prompt("Email (optional)")
        .with_initial_text(initial.email.clone())
        .allow_empty(true)
        .interact_text()?;
    Ok(ContactForm::new(name, phone, email))
}

fn pick_contact(
    theme: &ColorfulTheme,
    book: &ContactBook,
    prompt: &str,
) -> Result<Option<String>, ApiError> {
    let names: Vec<&str> = book.contacts().iter().map(|c| c.name.as_str()).collect();
    if names.is_empty() {
        println!("{}", format_notice(&Notice::info("No contacts in the book.")));
        return Ok(None);
    }
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&names)
        .default(0)
        .interact_opt()?;
    Ok(index.map(|i| names[i].to_string()))
}

/// Print the outcome of a submission; true when it took effect.
fn report(result: Result<Notice, ApiError>) -> bool {
    match result {
        Ok(notice) => {
            println!("{}", format_notice(&notice));
            true
        }
        Err(e) => {
            println!("{}", format_notice(&Notice::from(&e)));
            false
        }
    }
}

fn render_overview(book: &ContactBook, display: &DisplayConfig) {
    print!("{}", format_contacts_text(&book.contacts(), display));
    println!();
    print!("{}", format_visualization_text(&book.visualization(), display));
}
