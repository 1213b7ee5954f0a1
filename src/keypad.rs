use log::debug;

use crate::parse::is_input_char;
use crate::value::*;

/// Key that is displayed on the keypad for deleting the last character
pub const DELETE_KEY: char = '\u{232B}';
/// Key that starts evaluation
pub const EVAL_KEY: char = '=';

/// An action coming from a keypad button or a keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Digit, decimal point, operator, or bracket
    Char(char),
    Delete,
    Evaluate,
}

impl Key {
    /// Converts a keypad button label to a key. Returns None for
    /// characters the calculator does not accept
    pub fn from_char(c: char) -> Option<Key> {
        match c {
            EVAL_KEY => Some(Key::Evaluate),
            DELETE_KEY => Some(Key::Delete),
            c if is_input_char(c) => Some(Key::Char(c)),
            _ => None,
        }
    }

    /// Converts a keyboard key name (e.g, `Enter` or `7`) to a key
    pub fn from_key_name(name: &str) -> Option<Key> {
        match name {
            "Enter" => Some(Key::Evaluate),
            "Backspace" => Some(Key::Delete),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    // the delete sign is a button label, not a key name
                    (Some(DELETE_KEY), None) => None,
                    (Some(c), None) => Key::from_char(c),
                    _ => None,
                }
            }
        }
    }
}

/// Holds the pending input and what the calculator screen shows
#[derive(Default)]
pub struct Keypad {
    input: String,
    content: String,
    result: String,
    config: Config,
}

impl Keypad {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(config: Config) -> Self {
        Keypad {
            config,
            ..Default::default()
        }
    }

    /// The expression typed since the last evaluation
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The upper screen line: current input or the last evaluated expression
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The lower screen line: the last result or error text
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Appends one character to the input. Returns false and leaves the
    /// input intact if the character is not accepted
    pub fn append_char(&mut self, c: char) -> bool {
        if !is_input_char(c) {
            return false;
        }
        self.input.push(c);
        true
    }

    /// Removes the last character of the input
    pub fn delete_last(&mut self) {
        self.input.pop();
    }

    /// Evaluates the input and clears it. Returns None if the input is empty
    pub fn evaluate(&mut self) -> Option<CalcResult> {
        if self.input.is_empty() {
            return None;
        }

        let expr = std::mem::take(&mut self.input);
        let res = crate::eval_with(&expr, &self.config);
        self.result = match &res {
            Ok(v) => format_value(*v),
            Err(e) => e.screen_text().to_string(),
        };
        debug!("'{}' = {}", expr, self.result);
        self.content = expr;
        Some(res)
    }

    /// Processes a key press the way the screen expects: a key typed after
    /// an evaluation starts a new expression and hides the old result
    pub fn register_key(&mut self, key: Key) -> Option<CalcResult> {
        if key == Key::Evaluate {
            return self.evaluate();
        }

        if self.input.is_empty() {
            self.result.clear();
        }
        match key {
            Key::Delete => self.delete_last(),
            Key::Char(c) => {
                if !self.append_char(c) {
                    debug!("ignored key '{}'", c);
                }
            }
            Key::Evaluate => {}
        }
        self.content = self.input.clone();
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::*;

    fn type_str(kp: &mut Keypad, s: &str) {
        for c in s.chars() {
            let key = Key::from_char(c).unwrap();
            kp.register_key(key);
        }
    }

    #[test]
    fn test_keys() {
        assert_eq!(Key::from_char('7'), Some(Key::Char('7')));
        assert_eq!(Key::from_char('^'), Some(Key::Char('^')));
        assert_eq!(Key::from_char('='), Some(Key::Evaluate));
        assert_eq!(Key::from_char(DELETE_KEY), Some(Key::Delete));
        assert_eq!(Key::from_char('x'), None);

        assert_eq!(Key::from_key_name("Enter"), Some(Key::Evaluate));
        assert_eq!(Key::from_key_name("="), Some(Key::Evaluate));
        assert_eq!(Key::from_key_name("Backspace"), Some(Key::Delete));
        assert_eq!(Key::from_key_name("("), Some(Key::Char('(')));
        assert_eq!(Key::from_key_name("."), Some(Key::Char('.')));
        assert_eq!(Key::from_key_name("Shift"), None);
        assert_eq!(Key::from_key_name("a"), None);
        assert_eq!(Key::from_key_name(""), None);
        assert_eq!(Key::from_key_name("\u{232B}"), None);
    }

    #[test]
    fn test_typing() {
        let mut kp = Keypad::new();
        type_str(&mut kp, "12+3");
        assert_eq!(kp.input(), "12+3");
        assert_eq!(kp.content(), "12+3");
        kp.register_key(Key::Delete);
        kp.register_key(Key::Delete);
        assert_eq!(kp.input(), "12");
        assert_eq!(kp.content(), "12");
        assert!(!kp.append_char('a'));
        assert_eq!(kp.input(), "12");

        let mut empty = Keypad::new();
        empty.delete_last();
        assert_eq!(empty.input(), "");
    }

    #[test]
    fn test_evaluate() {
        let mut kp = Keypad::new();
        assert_eq!(kp.register_key(Key::Evaluate), None);

        type_str(&mut kp, "(2+3)*4");
        assert_eq!(kp.register_key(Key::Evaluate), Some(Ok(20.0)));
        assert_eq!(kp.input(), "");
        assert_eq!(kp.content(), "(2+3)*4");
        assert_eq!(kp.result(), "20");

        // new input hides the previous result
        type_str(&mut kp, "1/3");
        assert_eq!(kp.result(), "");
        assert_eq!(kp.content(), "1/3");
        assert_eq!(kp.evaluate(), Some(Ok(0.333)));
        assert_eq!(kp.result(), "0.333");
    }

    #[test]
    fn test_errors() {
        let mut kp = Keypad::new();
        type_str(&mut kp, "2+");
        assert_eq!(kp.register_key(Key::Evaluate), Some(Err(CalcError::TooManyOps)));
        assert_eq!(kp.result(), WRONG_EXPRESSION);

        // still usable after an error
        type_str(&mut kp, "5/0=");
        assert_eq!(kp.result(), "Infinity");
        assert_eq!(kp.content(), "5/0");
    }

    #[test]
    fn test_config() {
        let mut kp = Keypad::with_config(Config::new().with_precision(0.5));
        type_str(&mut kp, "2.3=");
        assert_eq!(kp.result(), "2.5");
    }
}
