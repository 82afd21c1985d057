use ratatui::{
    style::{Color, Style},
    text::Span,
};

use drivetui::logic::classify::EntryKind;
use drivetui::model::IconMode;

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub folder_color: Color,
    pub image_color: Color,
    pub video_color: Color,
    pub audio_color: Color,
    pub archive_color: Color,
    pub document_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            folder_color: Color::Blue,
            image_color: Color::Green,
            video_color: Color::Red,
            audio_color: Color::Magenta,
            archive_color: Color::Yellow,
            document_color: Color::Cyan,
        }
    }
}

/// Icon renderer that handles both emoji and Nerd Font modes
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    pub fn color(&self, kind: EntryKind) -> Color {
        match kind {
            EntryKind::Folder => self.theme.folder_color,
            EntryKind::Image => self.theme.image_color,
            EntryKind::Video => self.theme.video_color,
            EntryKind::Audio => self.theme.audio_color,
            EntryKind::Archive => self.theme.archive_color,
            EntryKind::Document => self.theme.document_color,
        }
    }

    fn glyph(&self, kind: EntryKind) -> &'static str {
        let (emoji, nerd) = match kind {
            EntryKind::Folder => ("📁 ", "\u{E5FF} "),
            EntryKind::Image => ("🖼️ ", "\u{F1C5} "),
            EntryKind::Video => ("🎬 ", "\u{F1C8} "),
            EntryKind::Audio => ("🎵 ", "\u{F1C7} "),
            EntryKind::Archive => ("📦 ", "\u{F1C6} "),
            EntryKind::Document => ("📄 ", "\u{F15B} "),
        };

        match self.mode {
            IconMode::Emoji => emoji,
            IconMode::NerdFont => nerd,
        }
    }

    /// Icon span for an entry kind
    pub fn entry_icon(&self, kind: EntryKind) -> Span<'static> {
        Span::styled(self.glyph(kind), Style::default().fg(self.color(kind)))
    }

    /// Icon for the drive root in the header and breadcrumb bar
    pub fn drive_icon(&self) -> Span<'static> {
        let icon = match self.mode {
            IconMode::Emoji => "☁️ ",
            IconMode::NerdFont => "\u{F0C2} ",
        };
        Span::styled(icon, Style::default().fg(self.theme.folder_color))
    }
}
