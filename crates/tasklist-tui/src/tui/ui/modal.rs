/*
[INPUT]:  Active Prompt and configured prompt texts
[OUTPUT]: Notice and confirmation dialogs rendered over the screen
[POS]:    TUI UI modal rendering
[UPDATE]: When prompt kinds or dialog layout change
*/

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tasklist_store::Prompt;

use crate::config::PromptTexts;

pub(in crate::tui) fn draw_prompt(
    frame: &mut ratatui::Frame,
    area: Rect,
    prompt: &Prompt,
    texts: &PromptTexts,
) {
    frame.render_widget(Clear, area);

    let (title, message, detail) = match prompt {
        Prompt::DuplicateTitle { title } => (
            texts.duplicate_title.as_str(),
            texts.duplicate_message.as_str(),
            title.as_str(),
        ),
        Prompt::ConfirmRemoval(removal) => (
            texts.remove_title.as_str(),
            texts.remove_message.as_str(),
            removal.title(),
        ),
    };

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("⚠ ", Style::default().fg(Color::Yellow)),
            Span::styled(message, Style::default().fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(
            format!("\"{detail}\""),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.push(if prompt.is_question() {
        Line::from(vec![
            Span::styled(
                "[y] ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Yes  ", Style::default().fg(Color::Cyan)),
            Span::styled(
                "[n] ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("No", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                "[Enter] ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("OK", Style::default().fg(Color::Cyan)),
        ])
    });

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
