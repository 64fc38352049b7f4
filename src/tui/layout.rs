use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::config::{ColorConfig, KeybindingConfig};
use crate::controller::Content;
use crate::domain::Selection;
use crate::tui::app::TuiApp;

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig, keys: &KeybindingConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Source tabs
            Constraint::Min(8),    // Content
            Constraint::Length(1), // More button
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Score
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_tabs(frame, app, chunks[1], colors);
    render_content(frame, app, chunks[2], colors);
    render_more_button(frame, app, chunks[3], colors);
    render_score(frame, app, chunks[5], colors);
    render_status_bar(frame, app, chunks[6], colors, keys);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        "Cats and dogs",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);
}

fn render_tabs(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let selected: usize = match app.controller.selection() {
        Selection::Cat => 0,
        Selection::Dog => 1,
    };

    let tabs = Tabs::new(vec![Selection::Cat.title(), Selection::Dog.title()])
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(colors.inactive_tab))
        .highlight_style(
            Style::default()
                .fg(colors.active_tab)
                .bg(colors.active_tab_bg)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);

    frame.render_widget(tabs, area);
}

fn render_content(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.content_border));

    match app.controller.content() {
        Some(Content::Fact(fact)) => {
            let paragraph = Paragraph::new(fact.text.as_str())
                .block(block.title(" Cat fact "))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
        }
        Some(Content::Image(picture)) => {
            let block = block
                .title(" Dog ")
                .title_bottom(format!(" {} ", picture.describe()));
            let inner = block.inner(area);
            let lines: Vec<Line> = app
                .preview
                .lines(app.controller.content_version(), &picture.image, inner.width, inner.height)
                .iter()
                .map(|line| Line::from(line.as_str()))
                .collect();

            let paragraph = Paragraph::new(Text::from(lines))
                .block(block)
                .style(Style::default().fg(colors.image))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
        }
        None => {
            let paragraph = Paragraph::new("Nothing fetched yet")
                .block(block)
                .style(Style::default().fg(colors.inactive_tab))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
        }
    }
}

fn render_more_button(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let label = if app.is_loading() { " loading… " } else { "   more   " };
    let button = Paragraph::new(Span::styled(
        label,
        Style::default()
            .fg(colors.button_fg)
            .bg(colors.button_bg)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);

    frame.render_widget(button, area);
}

fn render_score(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let score = Paragraph::new(app.controller.score().to_string())
        .style(Style::default().fg(colors.score))
        .alignment(Alignment::Center);
    frame.render_widget(score, area);
}

fn render_status_bar(
    frame: &mut Frame,
    app: &TuiApp,
    area: Rect,
    colors: &ColorConfig,
    keys: &KeybindingConfig,
) {
    let status = match app.status_message {
        Some(ref msg) => msg.clone(),
        None => keys.help_line(),
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}
