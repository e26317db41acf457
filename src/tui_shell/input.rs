/// Single-line editor with history. `cursor` counts chars, not bytes.
#[derive(Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
    history: Vec<String>,
    history_pos: Option<usize>,
}

impl Input {
    fn byte_at(&self, char_idx: usize) -> usize {
        self.buf
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buf.len())
    }

    fn char_len(&self) -> usize {
        self.buf.chars().count()
    }

    pub(super) fn clear(&mut self) {
        self.buf.clear();
        self.cursor = 0;
        self.history_pos = None;
    }

    pub(super) fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.buf.insert(at, c);
        self.cursor += 1;
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_at(self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub(super) fn set(&mut self, s: String) {
        self.buf = s;
        self.cursor = self.char_len();
    }

    /// Take the current line, recording it in history.
    pub(super) fn submit(&mut self) -> String {
        let line = std::mem::take(&mut self.buf);
        self.cursor = 0;
        self.history_pos = None;
        let trimmed = line.trim();
        if !trimmed.is_empty() && self.history.last().map(String::as_str) != Some(trimmed) {
            self.history.push(trimmed.to_string());
        }
        line
    }

    pub(super) fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next = match self.history_pos {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_pos = Some(next);
        self.set(self.history[next].clone());
    }

    pub(super) fn history_down(&mut self) {
        let Some(i) = self.history_pos else {
            return;
        };
        if i + 1 >= self.history.len() {
            self.clear();
            return;
        }
        self.history_pos = Some(i + 1);
        self.set(self.history[i + 1].clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_multibyte_text() {
        let mut input = Input::default();
        for c in "vídeo".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.buf, "víeo");
        input.delete();
        assert_eq!(input.buf, "vío");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn history_walks_and_dedups() {
        let mut input = Input::default();
        input.set("reload".to_string());
        input.submit();
        input.set("reload".to_string());
        input.submit();
        input.set("focus 1".to_string());
        assert_eq!(input.submit(), "focus 1");

        input.history_up();
        assert_eq!(input.buf, "focus 1");
        input.history_up();
        assert_eq!(input.buf, "reload");
        input.history_up();
        assert_eq!(input.buf, "reload");
        input.history_down();
        assert_eq!(input.buf, "focus 1");
        input.history_down();
        assert!(input.buf.is_empty());
    }
}
