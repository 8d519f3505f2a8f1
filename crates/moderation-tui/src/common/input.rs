use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Single line text input: the value plus a cursor counted in characters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    value: String,
    /// Position of cursor in the value, in chars not bytes
    character_index: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input holding `value` with the cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let character_index = value.chars().count();
        Self {
            value,
            character_index,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.character_index
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.character_index = 0;
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.character_index.saturating_sub(1);
        self.character_index = self.clamp_cursor(cursor_moved_left);
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.character_index.saturating_add(1);
        self.character_index = self.clamp_cursor(cursor_moved_right);
    }

    pub fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index();
        self.value.insert(index, new_char);
        self.move_cursor_right();
    }

    /// Returns the byte index based on the character position.
    ///
    /// Since each character in a string can be contain multiple bytes, it's necessary to calculate
    /// the byte index based on the index of the character.
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.character_index)
            .unwrap_or(self.value.len())
    }

    /// Delete the character left of the cursor
    pub fn delete_char(&mut self) {
        if self.character_index == 0 {
            return;
        }
        // rebuild from chars rather than String::remove, which works on bytes
        let current_index = self.character_index;
        let before = self.value.chars().take(current_index - 1);
        let after = self.value.chars().skip(current_index);
        self.value = before.chain(after).collect();
        self.move_cursor_left();
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.value.chars().count())
    }
}

/// Render a bordered input box. Returns where the terminal cursor should go when the
/// input is focused.
pub fn render_input(
    input: &TextInput,
    title: &str,
    is_focused: bool,
    area: Rect,
    buf: &mut Buffer,
) -> Option<Position> {
    let (border_color, text_style) = if is_focused {
        (Color::Cyan, Style::default().fg(Color::Yellow))
    } else {
        (Color::White, Style::default())
    };

    Paragraph::new(input.value())
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .border_style(Style::default().fg(border_color)),
        )
        .render(area, buf);

    if !is_focused || area.width < 3 || area.height < 3 {
        return None;
    }
    // +1 to account for the border, kept inside the box
    let max_x = area.x + area.width.saturating_sub(2);
    let x = (area.x + 1).saturating_add(input.cursor() as u16).min(max_x);
    Some(Position::new(x, area.y + 1))
}
