//! UI rendering with Ratatui.
//!
//! Design: Minimal black and white aesthetic. No colored borders.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use contacts_core::models::ContactView;

use crate::app::{AddForm, App, Screen, MENU};

/// Render the application UI.
pub fn render(frame: &mut Frame, app: &App) {
    // Main layout: content area + status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar (single line, no border)
        ])
        .split(frame.area());

    render_main(frame, app, chunks[0]);
    render_status(frame, app, chunks[1]);
}

/// Render the main content area.
fn render_main(frame: &mut Frame, app: &App, area: Rect) {
    match &app.screen {
        Screen::Menu => render_menu(frame, app, area),
        Screen::Add(form) => render_add(frame, form, area),
        Screen::Search { input } => {
            render_prompt(frame, " search contacts ", "Name, email, or phone: ", input, area)
        }
        Screen::Delete { input } => {
            render_prompt(frame, " delete contact ", "Contact name: ", input, area)
        }
        Screen::Results {
            title,
            contacts,
            scroll,
        } => render_results(frame, title, contacts, *scroll, area),
        Screen::Message(text) => {
            let msg = Paragraph::new(text.as_str())
                .wrap(Wrap { trim: false })
                .block(Block::default().title(" contacts ").borders(Borders::ALL));
            frame.render_widget(msg, area);
        }
    }
}

fn render_menu(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = MENU
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == app.selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };

            ListItem::new(format!("  {label}")).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" contacts ").borders(Borders::ALL));

    frame.render_widget(list, area);
}

fn render_add(frame: &mut Frame, form: &AddForm, area: Rect) {
    let fields = [
        ("Name: ", &form.name),
        ("Emails (comma-separated): ", &form.emails),
        ("Phones (comma-separated): ", &form.phones),
    ];

    let lines: Vec<Line> = fields
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let marker = if i == form.focus { "> " } else { "  " };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(*label, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(value.as_str()),
            ])
        })
        .collect();

    let para = Paragraph::new(lines)
        .block(Block::default().title(" add contact ").borders(Borders::ALL));
    frame.render_widget(para, area);
}

fn render_prompt(frame: &mut Frame, title: &str, label: &str, input: &str, area: Rect) {
    let line = Line::from(vec![
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(input),
    ]);
    let para = Paragraph::new(line).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(para, area);
}

fn render_results(
    frame: &mut Frame,
    title: &str,
    contacts: &[ContactView],
    scroll: usize,
    area: Rect,
) {
    if contacts.is_empty() {
        let msg = Paragraph::new("No contacts found.")
            .block(Block::default().title(format!(" {title} ")).borders(Borders::ALL));
        frame.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = contacts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let style = if i == scroll {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };

            ListItem::new(format!(
                "  Name: {}, Emails: {}, Phones: {}",
                c.name,
                c.emails.join(", "),
                c.phones.join(", "),
            ))
            .style(style)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(format!(" {title} ")).borders(Borders::ALL));
    frame.render_widget(list, area);
}

/// Render the status bar.
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let hints: &[(&str, &str)] = match app.screen {
        Screen::Menu => &[("enter", " select  "), ("esc", " quit")],
        Screen::Add(_) => &[("tab", " next field  "), ("enter", " save  "), ("esc", " back")],
        Screen::Search { .. } | Screen::Delete { .. } => {
            &[("enter", " submit  "), ("esc", " back")]
        }
        Screen::Results { .. } | Screen::Message(_) => &[("esc", " back")],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(*action),
            ]
        })
        .collect();

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}
