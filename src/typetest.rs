use crate::stats::Stats;
use crate::word::{Deletion, Keystroke, Letter, LetterStatus, Word};

/// The two lines produced by [`TypeTest::render`]: the primary text line and
/// an annotation line carrying the cursor marker plus per-letter hints.
/// Glyphs keep their classification so the UI can style them; the string
/// projections are what a plain host (or a test) compares against.
#[derive(Clone, Debug, Default)]
pub struct Viewport {
    pub text: Vec<Letter>,
    pub aux: Vec<Letter>,
}

impl Viewport {
    pub fn text_string(&self) -> String {
        self.text.iter().map(|l| l.ch).collect()
    }

    pub fn aux_string(&self) -> String {
        self.aux.iter().map(|l| l.ch).collect()
    }
}

/// A typing test over a fixed word sequence: the active word index, the
/// keystroke transitions, and the cursor-centered viewport renderer.
#[derive(Clone, Debug)]
pub struct TypeTest {
    words: Vec<Word>,
    current: usize,
    pub stats: Stats,
}

impl TypeTest {
    /// Builds a test from the word source's output. Empty tokens are
    /// skipped; the word source guarantees at least one word.
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        let words = words
            .iter()
            .map(|w| w.as_ref())
            .filter(|w| !w.is_empty())
            .map(Word::new)
            .collect();
        Self {
            words,
            current: 0,
            stats: Stats::new(),
        }
    }

    pub fn current_word(&self) -> usize {
        self.current
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Feed one printable keystroke to the active word. Exactly one stats
    /// counter is incremented per call; a keystroke bounced off the overflow
    /// cap still counts as wrong.
    pub fn enter(&mut self, c: char) {
        let Some(word) = self.words.get_mut(self.current) else {
            return;
        };
        match word.enter(c) {
            Keystroke::Correct => self.stats.correct += 1,
            Keystroke::Wrong | Keystroke::Rejected => self.stats.wrong += 1,
        }
    }

    /// Confirm the active word. A word typed at least to its target length
    /// counts the space as correct, an incomplete word as wrong. Returns
    /// `true` when the test is over (space on the last word).
    pub fn space(&mut self) -> bool {
        let Some(word) = self.words.get(self.current) else {
            return true;
        };

        if word.cursor() >= word.target_len() {
            self.stats.correct += 1;
        } else {
            self.stats.wrong += 1;
        }

        if self.current + 1 >= self.words.len() {
            return true;
        }

        self.current += 1;
        false
    }

    /// Backspace. At the start of a word this moves back to the previous
    /// word (whose contents are left exactly as they were) instead of
    /// erasing anything.
    pub fn delete(&mut self) {
        let Some(word) = self.words.get_mut(self.current) else {
            return;
        };
        if word.delete() == Deletion::AtWordStart && self.current > 0 {
            self.current -= 1;
        }
    }

    /// Render the scrolling viewport. The active word's cursor is anchored
    /// at column `(width - 1) / 2`; prior words scroll off to the left,
    /// words past the cursor render undecorated.
    pub fn render(&self, width: u16) -> Viewport {
        let width = width as usize;
        if width == 0 || self.words.is_empty() {
            return Viewport::default();
        }

        let cursor_col = (width - 1) / 2;

        // Screen column where the active word would start, possibly far
        // negative once earlier words have scrolled off.
        let mut start_offset = cursor_col as isize - self.words[self.current].cursor() as isize;

        // Walk back to the word the viewport's left edge falls inside or
        // before, one word plus its separator column at a time.
        let mut word = self.current;
        while start_offset > 0 && word > 0 {
            start_offset -= self.words[word - 1].effective_len() as isize + 1;
            word -= 1;
        }

        // A negative remainder is a letter offset into the starting word.
        // The scan below tolerates an offset at or past the word's length by
        // advancing across the boundary, so no further clamping is needed.
        let mut letter = 0usize;
        if start_offset < 0 {
            letter = (-start_offset) as usize;
            start_offset = 0;
        }

        let blank = Letter {
            ch: ' ',
            status: LetterStatus::None,
        };
        let mut text = vec![blank; start_offset as usize];
        let mut aux = text.clone();

        let mut glyphs = self.words[word].classify();

        // Up to the cursor column: classified letters plus annotations.
        let mut col = start_offset as usize;
        while col < cursor_col {
            if letter >= glyphs.len() {
                if word + 1 >= self.words.len() {
                    break;
                }
                text.push(blank);
                aux.push(blank);
                word += 1;
                glyphs = self.words[word].classify();
                letter = 0;
                col += 1;
                continue;
            }

            let glyph = glyphs[letter];
            text.push(glyph);
            aux.push(annotation(glyph.status));
            letter += 1;
            col += 1;
        }

        aux.push(Letter {
            ch: '^',
            status: LetterStatus::Cursor,
        });

        // Past the cursor column: primary line only, everything shown in the
        // untyped style. The active word continues from its classified
        // characters; later words render their raw target letters.
        let mut col = cursor_col;
        while col < width {
            if letter >= glyphs.len() {
                if word + 1 >= self.words.len() {
                    break;
                }
                text.push(blank);
                word += 1;
                glyphs = self.words[word].target_letters();
                letter = 0;
                col += 1;
                continue;
            }

            text.push(Letter {
                ch: glyphs[letter].ch,
                status: LetterStatus::None,
            });
            letter += 1;
            col += 1;
        }

        Viewport { text, aux }
    }
}

/// Annotation-line hint for a classified letter: `~` under a wrong letter,
/// `#` under overflow, a backtick under untyped, blank under correct.
fn annotation(status: LetterStatus) -> Letter {
    let ch = match status {
        LetterStatus::Wrong => '~',
        LetterStatus::Overflow => '#',
        LetterStatus::None => '`',
        LetterStatus::Correct | LetterStatus::Cursor => ' ',
    };
    Letter { ch, status }
}
