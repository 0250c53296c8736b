use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::stats::Stats;
use crate::typetest::TypeTest;
use crate::word::{Letter, LetterStatus};

/// Fixed mapping from letter classification to rendering style, shared by
/// the primary line and the annotation line.
pub fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::None => Style::default().fg(Color::DarkGray),
        LetterStatus::Correct => Style::default().fg(Color::Green),
        LetterStatus::Wrong => Style::default().fg(Color::Red),
        LetterStatus::Overflow => Style::default().fg(Color::Red),
        LetterStatus::Cursor => Style::default().fg(Color::Black).bg(Color::White),
    }
}

/// `MM:SS.mmm` elapsed-time display used in the header and the summary.
pub fn format_timer(elapsed: Duration) -> String {
    let ms = elapsed.as_millis();
    format!(
        "{:02}:{:02}.{:03}",
        ms / 60_000,
        (ms / 1000) % 60,
        ms % 1000
    )
}

/// Live header: elapsed time, net WPM, accuracy percentage.
pub fn header(stats: &Stats, elapsed: Duration) -> String {
    format!(
        "{} WPM: {:.0} ACC: {:.0}%",
        format_timer(elapsed),
        stats.net_wpm(elapsed),
        stats.accuracy() * 100.0
    )
}

/// One-line summary printed when the run ends.
pub fn summary(stats: &Stats, elapsed: Duration) -> String {
    format!(
        "T:{}, WPM(net/raw):{:.0}/{:.0}, ACC:{:.0}%, KS(all/ok/wrong):{}/{}/{}",
        format_timer(elapsed),
        stats.net_wpm(elapsed),
        stats.raw_wpm(elapsed),
        stats.accuracy() * 100.0,
        stats.total(),
        stats.correct,
        stats.wrong
    )
}

fn styled_line(letters: &[Letter]) -> Line<'static> {
    let spans = letters
        .iter()
        .map(|l| Span::styled(l.ch.to_string(), status_style(l.status)))
        .collect::<Vec<Span>>();
    Line::from(spans)
}

/// Draw one frame: header, the two viewport lines, footer hint. `width` is
/// the terminal width the host tracks from resize events; it drives the
/// viewport so the text re-centers the moment the terminal changes size.
pub fn render(f: &mut Frame, test: &TypeTest, elapsed: Duration, width: u16) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    let header_widget = Paragraph::new(header(&test.stats, elapsed))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(header_widget, chunks[0]);

    let viewport = test.render(width.min(area.width));
    let lines = vec![styled_line(&viewport.text), styled_line(&viewport.aux)];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Left), chunks[2]);

    let footer = Paragraph::new("Press [ESC] to exit")
        .alignment(Alignment::Left)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_formats_minutes_seconds_millis() {
        assert_eq!(format_timer(Duration::ZERO), "00:00.000");
        assert_eq!(format_timer(Duration::from_millis(1_500)), "00:01.500");
        assert_eq!(format_timer(Duration::from_millis(61_005)), "01:01.005");
        assert_eq!(format_timer(Duration::from_secs(600)), "10:00.000");
    }

    #[test]
    fn summary_reports_all_keystroke_counters() {
        let stats = Stats {
            correct: 50,
            wrong: 10,
        };
        let line = summary(&stats, Duration::from_secs(60));
        assert_eq!(
            line,
            "T:01:00.000, WPM(net/raw):10/12, ACC:83%, KS(all/ok/wrong):60/50/10"
        );
    }

    #[test]
    fn header_is_zeroed_before_the_first_keystroke() {
        let stats = Stats::new();
        assert_eq!(header(&stats, Duration::ZERO), "00:00.000 WPM: 0 ACC: 0%");
    }

    #[test]
    fn cursor_style_inverts_colors() {
        let style = status_style(LetterStatus::Cursor);
        assert_eq!(style.bg, Some(Color::White));
        assert_eq!(style.fg, Some(Color::Black));
    }

    #[test]
    fn render_uses_tracked_width_not_frame_width() {
        use crate::typetest::TypeTest;
        use ratatui::{backend::TestBackend, Terminal};

        let test = TypeTest::new(&["cat", "dog"]);
        let backend = TestBackend::new(30, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, &test, Duration::ZERO, 11))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content.iter().map(|c| c.symbol()).collect();
        // Width 11 puts the cursor at column 5 and cuts "dog" at the right
        // edge, even though the frame itself is 30 columns wide.
        assert!(content.contains("cat do"));
        assert!(!content.contains("cat dog"));
        assert!(content.contains('^'));
    }
}
