use ratatui::layout::{Constraint, Direction, Layout, Rect};

const CARD_WIDTH: u16 = 64;
/// Borders (2) + header (5) + divider (1) + three fields (9) + hint (1) + buttons (1).
pub const CARD_HEIGHT: u16 = 19;
const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub title: Rect,
    pub card: Rect,
    pub toast: Rect,
    pub status_bar: Rect,
}

pub struct CardLayout {
    pub avatar: Rect,
    pub summary: Rect,
    pub chip: Rect,
    pub divider: Rect,
    pub name: Rect,
    pub hobby: Rect,
    pub age: Rect,
    pub age_hint: Rect,
    pub buttons: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // App title
            Constraint::Length(1), // Gap
            Constraint::Min(3),    // Card + toast
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let title = main_chunks[0];
    let body = main_chunks[2];
    let status_bar = main_chunks[3];

    let card = centered(body, CARD_WIDTH, CARD_HEIGHT, false);
    let toast = centered(body, TOAST_WIDTH, TOAST_HEIGHT, true);

    AppLayout {
        title,
        card,
        toast,
        status_bar,
    }
}

/// Split the inside of the card border.
pub fn card_layout(inner: Rect, chip_width: u16) -> CardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Header
            Constraint::Length(1), // Divider
            Constraint::Length(3), // Name
            Constraint::Length(3), // Hobby
            Constraint::Length(3), // Age
            Constraint::Length(1), // Age hint
            Constraint::Length(1), // Buttons
        ])
        .split(inner);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(2)
        .constraints([
            Constraint::Length(9),          // Avatar
            Constraint::Min(8),             // Name and hobby
            Constraint::Length(chip_width), // Lock chip
        ])
        .split(rows[0]);

    // Chip sits on the middle line of the header
    let chip = Rect {
        y: header[2].y + header[2].height / 2,
        height: header[2].height.min(1),
        ..header[2]
    };
    let summary = Rect {
        y: header[1].y + header[1].height.saturating_sub(2) / 2,
        height: header[1].height.min(2),
        ..header[1]
    };

    CardLayout {
        avatar: header[0],
        summary,
        chip,
        divider: rows[1],
        name: rows[2],
        hobby: rows[3],
        age: rows[4],
        age_hint: rows[5],
        buttons: rows[6],
    }
}

fn centered(area: Rect, width: u16, height: u16, at_bottom: bool) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = if at_bottom {
        area.bottom() - height
    } else {
        area.y
    };
    Rect {
        x,
        y,
        width,
        height,
    }
}
