/// Number of text lines on a sign.
pub const SIGN_LINES: usize = 4;

/// First-line marker of a sign that protects the block it is attached to.
pub const PRIVATE_TAG: &str = "[Private]";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignText {
    lines: [String; SIGN_LINES],
}

impl SignText {
    /// Builds sign text from up to four lines; missing lines are blank, extra lines are dropped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut text = SignText::default();
        for (slot, line) in text.lines.iter_mut().zip(lines) {
            *slot = line.into();
        }
        text
    }

    #[inline]
    pub fn lines(&self) -> &[String; SIGN_LINES] {
        &self.lines
    }

    #[inline]
    pub fn is_private(&self) -> bool {
        self.lines[0] == PRIVATE_TAG
    }
}
