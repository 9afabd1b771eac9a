use crate::card::TaskItem;
use crate::document::{Document, ElementId};
use crate::error::Result;
use crate::form::Field;
use crate::kanban_board::{Focus, KanbanBoard};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame, Terminal,
};

/// Rows taken by one card: heading and body.
const CARD_HEIGHT: u16 = 2;

const HELP: &str = "Tab focus | Enter add / advance | arrows select | click a card to advance | q quit";

/// Index of the first card drawn in column `i`. Only the selected column
/// scrolls, far enough to keep the selected card on screen.
fn scroll_offset(board: &KanbanBoard, i: usize, inner: Rect) -> usize {
    if board.selected_status != i {
        return 0;
    }
    let visible = (inner.height / CARD_HEIGHT).max(1) as usize;
    (board.selected_task + 1).saturating_sub(visible)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct Areas {
    pub title: Rect,
    pub description: Rect,
    pub columns: Vec<Rect>,
    pub footer: Rect,
}

pub fn layout(area: Rect) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    let form = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(rows[1]);

    Areas {
        title: form[0],
        description: form[1],
        columns: columns.to_vec(),
        footer: rows[2],
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, board: &mut KanbanBoard) -> Result<()> {
    loop {
        let area = terminal.draw(|f| draw(f, &*board))?.area;
        let event = event::read()?;
        if handle_event(board, &event, area) == Control::Quit {
            return Ok(());
        }
    }
}

pub fn draw(f: &mut Frame, board: &KanbanBoard) {
    let areas = layout(f.area());
    draw_field(f, board, Field::Title, "Title", areas.title);
    draw_field(f, board, Field::Description, "Description", areas.description);

    let doc = board.document();
    for (i, (column, area)) in board.columns().iter().zip(&areas.columns).enumerate() {
        let heading = text_of(doc, column.element(), "h2");
        let is_selected = board.focus == Focus::Board && board.selected_status == i;
        let inner = Block::default().borders(Borders::ALL).inner(*area);
        let offset = scroll_offset(board, i, inner);

        let items: Vec<ListItem> = board
            .cards_in(column.status())
            .iter()
            .enumerate()
            .skip(offset)
            .map(|(j, card)| {
                let style = if is_selected && board.selected_task == j {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                ListItem::new(card_text(doc, card)).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(heading)
                .borders(Borders::ALL)
                .border_style(if is_selected {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                }),
        );
        f.render_widget(list, *area);
    }

    let footer = match &board.last_error {
        Some(message) => Line::from(Span::styled(
            format!("error: {message}"),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            format!("{} cards | {HELP}", board.card_count()),
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(footer), areas.footer);
}

fn draw_field(f: &mut Frame, board: &KanbanBoard, field: Field, label: &str, area: Rect) {
    let focused = board.focus == Focus::Field(field);
    let value = board.field_value(field);
    let input = Paragraph::new(value).block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );
    f.render_widget(input, area);

    if focused {
        let typed = value.chars().count() as u16;
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(typed)
            .min(area.right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn text_of<'a>(doc: &'a Document, root: ElementId, selector: &str) -> &'a str {
    doc.require_in(root, selector)
        .map(|el| doc.text(el))
        .unwrap_or_default()
}

/// The card as it sits in the document: heading over body.
fn card_text<'a>(doc: &'a Document, card: &TaskItem) -> Text<'a> {
    let heading = text_of(doc, card.element(), "h2");
    let body = text_of(doc, card.element(), "p").replace('\n', " ");
    Text::from(vec![
        Line::from(Span::styled(
            heading,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(body, Style::default().fg(Color::Gray))),
    ])
}

/// Card rendered at `(x, y)` when the board is drawn into `area`.
pub fn card_at(board: &KanbanBoard, area: Rect, x: u16, y: u16) -> Option<ElementId> {
    let areas = layout(area);
    let pos = Position::new(x, y);
    board
        .columns()
        .iter()
        .zip(&areas.columns)
        .enumerate()
        .find_map(|(i, (column, rect))| {
            let inner = Block::default().borders(Borders::ALL).inner(*rect);
            if !inner.contains(pos) {
                return None;
            }
            let row = ((y - inner.y) / CARD_HEIGHT) as usize + scroll_offset(board, i, inner);
            board
                .cards_in(column.status())
                .get(row)
                .map(|card| card.element())
        })
}

pub fn field_at(area: Rect, x: u16, y: u16) -> Option<Field> {
    let areas = layout(area);
    let pos = Position::new(x, y);
    if areas.title.contains(pos) {
        Some(Field::Title)
    } else if areas.description.contains(pos) {
        Some(Field::Description)
    } else {
        None
    }
}

/// Applies one terminal event. `area` is the area the board was last drawn into.
pub fn handle_event(board: &mut KanbanBoard, event: &Event, area: Rect) -> Control {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(board, *key),
        Event::Mouse(mouse) => {
            handle_mouse(board, *mouse, area);
            Control::Continue
        }
        _ => Control::Continue,
    }
}

fn handle_key(board: &mut KanbanBoard, key: KeyEvent) -> Control {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Control::Quit;
    }
    match key.code {
        KeyCode::Tab => {
            board.focus_next();
            return Control::Continue;
        }
        KeyCode::BackTab => {
            board.focus_prev();
            return Control::Continue;
        }
        _ => {}
    }

    match board.focus {
        Focus::Field(_) => match key.code {
            KeyCode::Enter => {
                let result = board.submit();
                board.report(result);
            }
            KeyCode::Esc => board.focus = Focus::Board,
            KeyCode::Backspace => board.backspace(),
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                board.type_char(c)
            }
            _ => {}
        },
        Focus::Board => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('a') | KeyCode::Char('i') => board.focus = Focus::Field(Field::Title),
            KeyCode::Left | KeyCode::Char('h') => board.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => board.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => board.select_task(-1),
            KeyCode::Down | KeyCode::Char('j') => board.select_task(1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let result = board.click_selected();
                board.report(result);
            }
            _ => {}
        },
    }
    Control::Continue
}

fn handle_mouse(board: &mut KanbanBoard, mouse: MouseEvent, area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if let Some(field) = field_at(area, mouse.column, mouse.row) {
        board.focus = Focus::Field(field);
    } else if let Some(card) = card_at(board, area, mouse.column, mouse.row) {
        let result = board.click(card);
        board.report(result);
    }
}
