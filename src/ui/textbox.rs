use crate::core::Region;

/// Single-line text entry. Receives characters only while focused; at most
/// one box is focused at a time (enforced by the widget set).
pub struct TextBox {
    pub text: String,
    pub region: Region,
    pub max_len: usize,
    pub focused: bool,
}

impl TextBox {
    pub fn new(region: Region, max_len: usize) -> Self {
        Self {
            text: String::new(),
            region,
            max_len,
            focused: false,
        }
    }

    pub fn with_text(region: Region, max_len: usize, text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::new(region, max_len)
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() && self.text.chars().count() < self.max_len {
            self.text.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.text.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_max_len_and_filters_control_chars() {
        let mut tb = TextBox::new(Region::new(0.0, 0.0, 50.0, 20.0), 3);
        tb.push_char('2');
        tb.push_char('5');
        tb.push_char('\u{8}');
        tb.push_char('5');
        tb.push_char('9');
        assert_eq!(tb.text, "255");
        tb.pop_char();
        assert_eq!(tb.text, "25");
    }
}
