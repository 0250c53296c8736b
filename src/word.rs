/// Sentinel for an input slot nothing has been typed into.
pub const EMPTY: char = '\0';

/// A word's input buffer may grow past its target length (overflow typing),
/// but never beyond this multiple of the target length.
pub const OVERFLOW_CAP_FACTOR: usize = 4;

/// Classification of a single rendered position within a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterStatus {
    /// Not yet typed; the target letter is shown.
    None,
    /// Typed character matches the target.
    Correct,
    /// Typed character differs from the target.
    Wrong,
    /// Typed past the target word's length.
    Overflow,
    /// The cursor marker. Never produced by classification; used by the
    /// renderer for the `^` column in the annotation line.
    Cursor,
}

/// One rendered position: the character to display and its status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Letter {
    pub ch: char,
    pub status: LetterStatus,
}

/// Outcome of feeding one keystroke to a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keystroke {
    Correct,
    Wrong,
    /// Input buffer is at the overflow cap; nothing was written.
    Rejected,
}

/// Outcome of a backspace on a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deletion {
    Erased,
    /// Cursor was already at the start of the word; caller may move to the
    /// previous word.
    AtWordStart,
}

/// One target word plus the user's in-progress input and cursor.
#[derive(Clone, Debug)]
pub struct Word {
    letters: Vec<char>,
    input: Vec<char>,
    cursor: usize,
}

impl Word {
    pub fn new(word: &str) -> Self {
        let letters: Vec<char> = word.chars().collect();
        let input = vec![EMPTY; letters.len()];
        Self {
            letters,
            input,
            cursor: 0,
        }
    }

    pub fn target_len(&self) -> usize {
        self.letters.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Target length, extended while trailing overflow slots remain typed.
    pub fn effective_len(&self) -> usize {
        for i in (self.letters.len()..self.input.len()).rev() {
            if self.input[i] != EMPTY {
                return i + 1;
            }
        }
        self.letters.len()
    }

    /// Per-position classification over the effective length. Pure; derived
    /// from `letters` and `input` alone.
    pub fn classify(&self) -> Vec<Letter> {
        let length = self.effective_len();
        let mut letters = Vec::with_capacity(length);

        for (i, &target) in self.letters.iter().enumerate() {
            letters.push(match self.input[i] {
                EMPTY | ' ' => Letter {
                    ch: target,
                    status: LetterStatus::None,
                },
                typed if typed == target => Letter {
                    ch: typed,
                    status: LetterStatus::Correct,
                },
                typed => Letter {
                    ch: typed,
                    status: LetterStatus::Wrong,
                },
            });
        }

        for i in self.letters.len()..length {
            letters.push(Letter {
                ch: self.input[i],
                status: LetterStatus::Overflow,
            });
        }

        letters
    }

    /// The target letters as undecorated glyphs, used when rendering words
    /// the cursor has not reached yet.
    pub fn target_letters(&self) -> Vec<Letter> {
        self.letters
            .iter()
            .map(|&ch| Letter {
                ch,
                status: LetterStatus::None,
            })
            .collect()
    }

    /// Accept one keystroke. Grows the input buffer in target-length
    /// increments up to the overflow cap; at the cap the keystroke is
    /// rejected and nothing is written.
    pub fn enter(&mut self, c: char) -> Keystroke {
        if self.cursor >= self.input.len() {
            if self.input.len() >= OVERFLOW_CAP_FACTOR * self.letters.len() {
                return Keystroke::Rejected;
            }
            let grown = self.input.len() + self.letters.len();
            self.input.resize(grown, EMPTY);
        }

        let outcome = if self.cursor < self.letters.len() {
            if c == self.letters[self.cursor] {
                Keystroke::Correct
            } else {
                Keystroke::Wrong
            }
        } else {
            Keystroke::Wrong
        };

        self.input[self.cursor] = c;
        self.cursor += 1;
        outcome
    }

    /// Erase the slot before the cursor. At the start of the word nothing is
    /// mutated and `AtWordStart` tells the caller to move back a word.
    pub fn delete(&mut self) -> Deletion {
        let length = self.effective_len();
        if self.cursor > length {
            self.cursor = length;
        }

        if self.cursor == 0 {
            return Deletion::AtWordStart;
        }

        self.cursor -= 1;
        self.input[self.cursor] = EMPTY;
        Deletion::Erased
    }
}
