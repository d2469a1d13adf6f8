/// Single-line edit buffer with a char-aware cursor, shared by the search
/// input and the modal form text fields.
#[derive(Debug, Clone, Default)]
pub struct FieldBuffer {
    text: String,
    cursor: usize,
}

impl FieldBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text<T: Into<String>>(value: T) -> Self {
        let text = value.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn set<T: Into<String>>(&mut self, value: T) {
        self.text = value.into();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf);
        self.text.insert_str(self.cursor, encoded);
        self.cursor += encoded.len();
    }

    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.text.drain(idx..self.cursor);
            self.cursor = idx;
        }
    }

    pub fn delete_char(&mut self) {
        if let Some((idx, ch)) = self.text[self.cursor..].char_indices().next() {
            let start = self.cursor + idx;
            self.text.drain(start..start + ch.len_utf8());
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some((idx, ch)) = self.text[self.cursor..].char_indices().next() {
            self.cursor = self.cursor + idx + ch.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_respect_char_boundaries() {
        let mut buffer = FieldBuffer::new();
        for ch in "héllo".chars() {
            buffer.insert_char(ch);
        }
        assert_eq!(buffer.as_str(), "héllo");

        buffer.backspace();
        buffer.backspace();
        buffer.backspace();
        buffer.backspace();
        assert_eq!(buffer.as_str(), "h");
    }

    #[test]
    fn cursor_edits_in_the_middle() {
        let mut buffer = FieldBuffer::from_text("deploy");
        buffer.move_left();
        buffer.move_left();
        buffer.insert_char('X');
        assert_eq!(buffer.as_str(), "deplXoy");

        buffer.delete_char();
        assert_eq!(buffer.as_str(), "deplXy");
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut buffer = FieldBuffer::new();
        buffer.insert_char('\r');
        buffer.insert_char('\n');
        assert_eq!(buffer.as_str(), "");
    }
}
