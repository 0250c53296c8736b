use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use typefast::runtime::{FixedTicker, Runner, TestEventSource, TypeEvent};
use typefast::typetest::TypeTest;
use typefast::word::LetterStatus;

fn key(c: char) -> TypeEvent {
    TypeEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

// Headless end-to-end flow: drive a test through the Runner/TestEventSource
// plumbing the way the binary does, without a TTY.
#[test]
fn headless_typing_flow_completes() {
    let mut test = TypeTest::new(&["cat", "dog"]);

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    for c in "cat dog ".chars() {
        tx.send(key(c)).unwrap();
    }
    tx.send(TypeEvent::Resize(11)).unwrap();

    let mut width: u16 = 80;
    let mut done = false;

    for _ in 0..100u32 {
        match runner.step() {
            TypeEvent::Tick => {}
            TypeEvent::Resize(w) => width = w,
            TypeEvent::Key(key) => {
                if let KeyCode::Char(c) = key.code {
                    if c == ' ' {
                        done = test.space();
                    } else {
                        test.enter(c);
                    }
                }
            }
        }
        if done && width == 11 {
            break;
        }
    }

    assert!(done, "space on the last word should end the test");
    assert_eq!(test.stats.correct, 8);
    assert_eq!(test.stats.wrong, 0);

    // The resize-carried width drives the final render: at width 11 the
    // cursor column is 5 and only the tail of the text is left of it.
    assert_eq!(width, 11);
    let viewport = test.render(width);
    assert_eq!(viewport.text_string(), "t dog");
    assert_eq!(viewport.aux_string(), "     ^");

    // Stats are read, not reset, at completion.
    let elapsed = Duration::from_secs(6);
    assert_eq!(test.stats.accuracy(), 1.0);
    assert_eq!(test.stats.net_wpm(elapsed), 16.0);
    assert_eq!(test.stats.raw_wpm(elapsed), 16.0);
}

// The scenario from the rendering design: words ["cat","dog"], width 11,
// typed "cat d" so far.
#[test]
fn viewport_scenario_cat_dog_width_11() {
    let mut test = TypeTest::new(&["cat", "dog"]);
    for c in "cat".chars() {
        test.enter(c);
    }
    test.space();
    test.enter('d');

    let viewport = test.render(11);
    assert_eq!(viewport.text_string(), "cat dog");
    assert_eq!(viewport.aux_string(), "     ^");

    // "cat" fully correct, separator, 'd' correct, "og" still pending.
    let statuses: Vec<LetterStatus> = viewport.text.iter().map(|l| l.status).collect();
    assert_eq!(&statuses[..3], &[LetterStatus::Correct; 3]);
    assert_eq!(statuses[4], LetterStatus::Correct);
    assert_eq!(&statuses[5..], &[LetterStatus::None; 2]);
}

#[test]
fn backspace_flood_is_safe_at_every_width() {
    let mut test = TypeTest::new(&["one", "two", "six"]);
    for c in "one two si".chars() {
        if c == ' ' {
            test.space();
        } else {
            test.enter(c);
        }
    }

    // word_count x overflow cap x word length backspaces, far more than
    // could ever be typed.
    for i in 0..(3 * 4 * 3) {
        test.delete();
        let _ = test.render((i % 7) as u16);
    }
    assert_eq!(test.current_word(), 0);
}
