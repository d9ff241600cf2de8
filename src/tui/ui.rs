use crate::select::models::{Labeled, Tickable};
use crate::tui::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const TICKED: &str = "☑";
const UNTICKED: &str = "☐";

pub fn draw<T: Tickable + Labeled + Clone>(frame: &mut Frame, app: &mut App<T>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // List
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);
    draw_list(frame, chunks[1], app);
    draw_footer(frame, chunks[2], app);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn checkbox(ticked: bool) -> &'static str {
    if ticked { TICKED } else { UNTICKED }
}

fn draw_header<T: Tickable + Labeled + Clone>(frame: &mut Frame, area: Rect, app: &App<T>) {
    let header_text = format!(
        "{} - {}/{} ticked",
        app.title,
        app.ticked_count(),
        app.total_items()
    );
    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title("Simple Select"))
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(header, area);
}

fn draw_list<T: Tickable + Labeled + Clone>(frame: &mut Frame, area: Rect, app: &mut App<T>) {
    // The host may have changed the items since the last event.
    app.controller.refresh();
    let ticked_all = app.controller.ticked_all();
    let mut rows = vec![ListItem::new(Line::from(Span::styled(
        format!("{} Select all", checkbox(ticked_all)),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))];

    let collection = app.controller.store().collection();
    rows.extend(collection.borrow().iter().map(|item| {
        let style = if item.is_ticked() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        let content = format!("{} {}", checkbox(item.is_ticked()), app.template.render(item));
        ListItem::new(Line::from(Span::styled(content, style)))
    }));

    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title("Items"))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    app.clamp_cursor();
    app.list_state.select(Some(app.cursor));
    app.list_area = area;

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn draw_footer<T: Tickable + Labeled + Clone>(frame: &mut Frame, area: Rect, app: &App<T>) {
    let footer_text = if app.help_mode {
        "HELP | ?/Esc: close".to_string()
    } else {
        "↑↓/j/k: navigate | Space/Enter: tick | a: tick all | ?: help | q: done".to_string()
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "Simple Select - Keyboard Commands",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Move up/down",
        "  Home/g End/G      First/last row",
        "",
        "SELECTION:",
        "  Space / Enter     Tick the current row",
        "  a                 Tick or untick all items",
        "  Mouse click       Tick the clicked row",
        "",
        "OTHER:",
        "  q / Esc           Done, print the ticked items",
        "  Ctrl+C            Abort without output",
        "  ?                 Show this help",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let area = centered_rect(80, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::controller::Delegates;
    use crate::select::models::{shared, Item};
    use crate::tui::template::ItemTemplate;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn render(app: &mut App<Item>) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn line_with<'a>(lines: &'a [String], needle: &str) -> &'a str {
        lines
            .iter()
            .find(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("no line contains {:?}: {:#?}", needle, lines))
    }

    #[test]
    fn test_draw_default_rows() {
        let collection = shared(vec![Item::new("item 1", false), Item::new("item 2", true)]);
        let mut app = App::new(collection, Delegates::new());

        let lines = render(&mut app);

        assert!(line_with(&lines, "Select all").contains(UNTICKED));
        assert!(line_with(&lines, "item 1").contains(UNTICKED));
        assert!(line_with(&lines, "item 2").contains(TICKED));
        assert!(line_with(&lines, "1/2 ticked").contains("Select"));
    }

    #[test]
    fn test_draw_reflects_state_after_click() {
        let collection = shared(vec![Item::new("item 1", false), Item::new("item 2", false)]);
        let mut app = App::new(collection, Delegates::new());

        app.activate_row(0).unwrap();
        let lines = render(&mut app);

        assert!(line_with(&lines, "Select all").contains(TICKED));
        assert!(line_with(&lines, "item 1").contains(TICKED));
        assert!(line_with(&lines, "item 2").contains(TICKED));
    }

    #[test]
    fn test_draw_select_all_follows_host_push() {
        let collection = shared(vec![Item::new("item 1", true), Item::new("item 2", true)]);
        let mut app = App::new(std::rc::Rc::clone(&collection), Delegates::new());
        assert!(line_with(&render(&mut app), "Select all").contains(TICKED));

        collection.borrow_mut().push(Item::new("item 3", false));
        let lines = render(&mut app);

        assert!(line_with(&lines, "Select all").contains(UNTICKED));
        assert!(line_with(&lines, "item 3").contains(UNTICKED));
    }

    #[test]
    fn test_draw_uses_item_template() {
        let collection = shared(vec![Item::new("item 1", false)]);
        let mut app = App::new(collection, Delegates::new())
            .with_template(ItemTemplate::from_pattern(Some("{name}a".to_string())));

        let lines = render(&mut app);

        assert!(lines.iter().any(|line| line.contains("item 1a")));
    }

    #[test]
    fn test_draw_records_list_area_and_clamps_cursor() {
        let collection = shared(vec![Item::new("item 1", false), Item::new("item 2", false)]);
        let mut app = App::new(std::rc::Rc::clone(&collection), Delegates::new());
        app.cursor = 2;
        collection.borrow_mut().clear();

        render(&mut app);

        assert_eq!(app.cursor, 0);
        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(app.list_area, Rect::new(1, 4, 78, 8));
    }

    #[test]
    fn test_draw_help_overlay() {
        let collection = shared(vec![Item::new("item 1", false)]);
        let mut app = App::new(collection, Delegates::new());
        app.help_mode = true;

        let lines = render(&mut app);

        assert!(lines.iter().any(|line| line.contains("Keyboard Commands")));
    }
}
