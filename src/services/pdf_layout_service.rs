use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::models::itinerary::{Activity, DailyPlan, Itinerary};

// A4 in millimetres; font sizes are points, line heights are fixed constants
// per block kind rather than being derived from font metrics.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const PAGE_MARGIN_MM: f32 = 20.0;

const HEADER_BAND_HEIGHT: f32 = 35.0;
const FIRST_PAGE_START_Y: f32 = 50.0;
const SECTION_SPACING: f32 = 10.0;
const ACTIVITY_SPACING: f32 = 3.0;
const LABEL_ADVANCE: f32 = 7.0;
const DAY_HEADER_ADVANCE: f32 = 12.0;
// Room for a day header plus one activity; breaking early keeps the header
// from being orphaned at the bottom of a page.
const DAY_HEADER_MIN_REMAINING: f32 = 60.0;

const TITLE_LINE_HEIGHT: f32 = 7.0;
const SUMMARY_LINE_HEIGHT: f32 = 6.0;
const BODY_LINE_HEIGHT: f32 = 5.0;
const NOTE_LINE_HEIGHT: f32 = 4.0;

const BRAND_FONT_SIZE: f32 = 26.0;
const SUBTITLE_FONT_SIZE: f32 = 12.0;
const TITLE_FONT_SIZE: f32 = 18.0;
const SUMMARY_FONT_SIZE: f32 = 11.0;
const DAY_HEADER_FONT_SIZE: f32 = 14.0;
const LABEL_FONT_SIZE: f32 = 11.0;
const BODY_FONT_SIZE: f32 = 10.0;
const NOTE_FONT_SIZE: f32 = 8.0;

// Approximate glyph advance in millimetres per point of font size. Good
// enough for wrapping; the rendering collaborator re-measures nothing.
const CHAR_WIDTH_FACTOR: f32 = 0.18;

const BRAND_TEAL: Rgb = (20, 184, 166);
const WHITE: Rgb = (255, 255, 255);
const INK: Rgb = (41, 37, 36);
const MUTED: Rgb = (87, 83, 78);
const FOOTNOTE_GRAY: Rgb = (120, 113, 108);
const DAY_BAND_TINT: Rgb = (240, 253, 250);
const DAY_HEADING_TEAL: Rgb = (17, 94, 89);
const MORNING_BROWN: Rgb = (120, 53, 15);
const AFTERNOON_BLUE: Rgb = (12, 74, 110);
const EVENING_INDIGO: Rgb = (55, 48, 163);

const BRAND_HEADER: &str = "Unrushed Europe";
const BRAND_SUBTITLE: &str = "Your Personalized Travel Itinerary";
const FOOTER_ATTRIBUTION: &str = "Created with Unrushed Europe AI Planner";

pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
}

/// One drawing operation for the external PDF renderer. Coordinates share
/// the page's millimetre space; `y` is the text baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawInstruction {
    Text {
        text: String,
        x: f32,
        y: f32,
        font_size: f32,
        color: Rgb,
        style: FontStyle,
        align: TextAlign,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub number: usize,
    pub instructions: Vec<DrawInstruction>,
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub start_y: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH_MM,
            page_height: PAGE_HEIGHT_MM,
            margin: PAGE_MARGIN_MM,
            start_y: FIRST_PAGE_START_Y,
        }
    }
}

impl LayoutConfig {
    fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    fn usable_bottom(&self) -> f32 {
        self.page_height - self.margin
    }
}

/// Wrap text into lines that fit `max_width` at the given font size, using
/// the constant per-character advance. Words longer than a whole line are
/// hard-split. Blank input wraps to no lines at all.
pub fn wrap_text(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let budget = max_chars_per_line(max_width, font_size);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for word in text.split_whitespace() {
        for piece in split_long_word(word, budget) {
            let piece_chars = piece.chars().count();
            let needed = if current_chars == 0 {
                piece_chars
            } else {
                current_chars + 1 + piece_chars
            };
            if needed > budget && current_chars > 0 {
                lines.push(std::mem::take(&mut current));
                current_chars = 0;
            }
            if current_chars == 0 {
                current = piece;
                current_chars = piece_chars;
            } else {
                current.push(' ');
                current.push_str(&piece);
                current_chars += 1 + piece_chars;
            }
        }
    }
    if current_chars > 0 {
        lines.push(current);
    }
    lines
}

fn max_chars_per_line(max_width: f32, font_size: f32) -> usize {
    let char_width = font_size * CHAR_WIDTH_FACTOR;
    ((max_width / char_width).floor() as usize).max(1)
}

fn split_long_word(word: &str, budget: usize) -> Vec<String> {
    if word.chars().count() <= budget {
        return vec![word.to_string()];
    }
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(budget)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Accumulates draw instructions page by page, breaking to a fresh page
/// whenever the next block would overflow the usable height. Blocks are
/// placed whole; nothing is ever split across a break.
struct PageBuilder<'a> {
    config: &'a LayoutConfig,
    pages: Vec<Vec<DrawInstruction>>,
    current: Vec<DrawInstruction>,
    y: f32,
}

impl<'a> PageBuilder<'a> {
    fn new(config: &'a LayoutConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            current: Vec::new(),
            y: config.start_y,
        }
    }

    fn remaining(&self) -> f32 {
        self.config.usable_bottom() - self.y
    }

    fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = self.config.margin;
    }

    fn ensure_room(&mut self, height: f32) {
        if self.y + height > self.config.usable_bottom() {
            self.break_page();
        }
    }

    fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    fn push(&mut self, instruction: DrawInstruction) {
        self.current.push(instruction);
    }

    fn finish(mut self) -> Vec<Vec<DrawInstruction>> {
        self.pages.push(self.current);
        self.pages
    }
}

/// Lays an itinerary out into fixed-size pages of draw instructions for the
/// PDF-rendering collaborator. Deterministic: identical itinerary and
/// config always yield identical pages.
pub struct PdfLayoutService {
    config: LayoutConfig,
}

impl Default for PdfLayoutService {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfLayoutService {
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn layout(&self, itinerary: &Itinerary) -> Vec<Page> {
        let mut builder = PageBuilder::new(&self.config);
        let center_x = self.config.page_width / 2.0;

        // Branded header band, first page only.
        builder.push(DrawInstruction::Rect {
            x: 0.0,
            y: 0.0,
            width: self.config.page_width,
            height: HEADER_BAND_HEIGHT,
            color: BRAND_TEAL,
        });
        builder.push(DrawInstruction::Text {
            text: BRAND_HEADER.to_string(),
            x: center_x,
            y: 15.0,
            font_size: BRAND_FONT_SIZE,
            color: WHITE,
            style: FontStyle::Bold,
            align: TextAlign::Center,
        });
        builder.push(DrawInstruction::Text {
            text: BRAND_SUBTITLE.to_string(),
            x: center_x,
            y: 25.0,
            font_size: SUBTITLE_FONT_SIZE,
            color: WHITE,
            style: FontStyle::Normal,
            align: TextAlign::Center,
        });

        self.place_block(
            &mut builder,
            &itinerary.trip_title,
            center_x,
            TITLE_FONT_SIZE,
            TITLE_LINE_HEIGHT,
            INK,
            FontStyle::Bold,
            TextAlign::Center,
            self.config.content_width(),
        );
        builder.advance(SECTION_SPACING / 2.0);

        self.place_block(
            &mut builder,
            &itinerary.summary,
            center_x,
            SUMMARY_FONT_SIZE,
            SUMMARY_LINE_HEIGHT,
            MUTED,
            FontStyle::Normal,
            TextAlign::Center,
            self.config.content_width(),
        );
        builder.advance(SECTION_SPACING);

        for day in &itinerary.daily_plan {
            self.place_day(&mut builder, day);
        }

        self.number_and_footer(builder.finish())
    }

    /// Place one wrapped text block, whole, breaking to a new page first if
    /// it does not fit the remaining space.
    fn place_block(
        &self,
        builder: &mut PageBuilder,
        text: &str,
        x: f32,
        font_size: f32,
        line_height: f32,
        color: Rgb,
        style: FontStyle,
        align: TextAlign,
        max_width: f32,
    ) {
        let lines = wrap_text(text, max_width, font_size);
        if lines.is_empty() {
            return;
        }
        // Breaks at most once. A block taller than an entire page still goes
        // down whole on its fresh page and runs past the bottom margin;
        // blocks are never split.
        builder.ensure_room(lines.len() as f32 * line_height);
        for line in lines {
            builder.push(DrawInstruction::Text {
                text: line,
                x,
                y: builder.y,
                font_size,
                color,
                style,
                align,
            });
            builder.advance(line_height);
        }
    }

    fn place_label(&self, builder: &mut PageBuilder, label: &str, color: Rgb, x: f32) {
        // A label always introduces a block; keep at least one body line
        // with it so it never sits alone at the bottom of a page.
        builder.ensure_room(LABEL_ADVANCE + BODY_LINE_HEIGHT);
        builder.push(DrawInstruction::Text {
            text: label.to_string(),
            x,
            y: builder.y,
            font_size: LABEL_FONT_SIZE,
            color,
            style: FontStyle::Bold,
            align: TextAlign::Left,
        });
        builder.advance(LABEL_ADVANCE);
    }

    fn place_day(&self, builder: &mut PageBuilder, day: &DailyPlan) {
        if builder.remaining() < DAY_HEADER_MIN_REMAINING {
            builder.break_page();
        }

        builder.push(DrawInstruction::Rect {
            x: self.config.margin,
            y: builder.y - 5.0,
            width: self.config.content_width(),
            height: 10.0,
            color: DAY_BAND_TINT,
        });
        builder.push(DrawInstruction::Text {
            text: format!("Day {}: {}", day.day, day.title),
            x: self.config.margin + 5.0,
            y: builder.y + 2.0,
            font_size: DAY_HEADER_FONT_SIZE,
            color: DAY_HEADING_TEAL,
            style: FontStyle::Bold,
            align: TextAlign::Left,
        });
        builder.advance(DAY_HEADER_ADVANCE);

        let content_x = self.config.margin + 5.0;
        let content_width = self.config.content_width() - 10.0;

        self.place_activity(
            builder,
            "MORNING",
            MORNING_BROWN,
            &day.morning_activity,
            content_x,
            content_width,
        );
        self.place_activity(
            builder,
            "AFTERNOON",
            AFTERNOON_BLUE,
            &day.afternoon_activity,
            content_x,
            content_width,
        );

        self.place_label(builder, "EVENING", EVENING_INDIGO, content_x);
        self.place_block(
            builder,
            &day.evening_suggestion,
            content_x,
            BODY_FONT_SIZE,
            BODY_LINE_HEIGHT,
            INK,
            FontStyle::Normal,
            TextAlign::Left,
            content_width,
        );

        if let Some(recommendations) = &day.restaurant_recommendations {
            if !recommendations.is_empty() {
                builder.advance(ACTIVITY_SPACING);
                self.place_label(builder, "WHERE TO EAT", DAY_HEADING_TEAL, content_x);
                for recommendation in recommendations {
                    self.place_block(
                        builder,
                        &format!("- {}", recommendation),
                        content_x,
                        BODY_FONT_SIZE,
                        BODY_LINE_HEIGHT,
                        INK,
                        FontStyle::Normal,
                        TextAlign::Left,
                        content_width,
                    );
                }
            }
        }

        if let Some(tips) = &day.transportation_tips {
            if !tips.trim().is_empty() {
                builder.advance(ACTIVITY_SPACING);
                self.place_label(builder, "GETTING AROUND", DAY_HEADING_TEAL, content_x);
                self.place_block(
                    builder,
                    tips,
                    content_x,
                    BODY_FONT_SIZE,
                    BODY_LINE_HEIGHT,
                    INK,
                    FontStyle::Normal,
                    TextAlign::Left,
                    content_width,
                );
            }
        }

        builder.advance(SECTION_SPACING);
    }

    fn place_activity(
        &self,
        builder: &mut PageBuilder,
        label: &str,
        label_color: Rgb,
        activity: &Activity,
        x: f32,
        max_width: f32,
    ) {
        self.place_label(builder, label, label_color, x);
        self.place_block(
            builder,
            &format!("{} - {}", activity.name, activity.description),
            x,
            BODY_FONT_SIZE,
            BODY_LINE_HEIGHT,
            INK,
            FontStyle::Normal,
            TextAlign::Left,
            max_width,
        );

        let mut meta: Vec<String> = Vec::new();
        if let Some(cost) = &activity.estimated_cost {
            if !cost.trim().is_empty() {
                meta.push(format!("Approx. cost: {}", cost));
            }
        }
        if let Some(duration) = &activity.duration {
            if !duration.trim().is_empty() {
                meta.push(format!("Duration: {}", duration));
            }
        }
        if !meta.is_empty() {
            self.place_block(
                builder,
                &meta.join(", "),
                x,
                NOTE_FONT_SIZE,
                NOTE_LINE_HEIGHT,
                FOOTNOTE_GRAY,
                FontStyle::Normal,
                TextAlign::Left,
                max_width,
            );
        }

        if !activity.accessibility_note.trim().is_empty() {
            self.place_block(
                builder,
                &format!("Accessibility: {}", activity.accessibility_note),
                x,
                NOTE_FONT_SIZE,
                NOTE_LINE_HEIGHT,
                FOOTNOTE_GRAY,
                FontStyle::Normal,
                TextAlign::Left,
                max_width,
            );
        }
        builder.advance(ACTIVITY_SPACING);
    }

    /// Second pass: page numbers and attribution go on every page once the
    /// total count is known.
    fn number_and_footer(&self, raw_pages: Vec<Vec<DrawInstruction>>) -> Vec<Page> {
        let total = raw_pages.len();
        let center_x = self.config.page_width / 2.0;
        raw_pages
            .into_iter()
            .enumerate()
            .map(|(index, mut instructions)| {
                let number = index + 1;
                instructions.push(DrawInstruction::Text {
                    text: format!("Page {} of {}", number, total),
                    x: center_x,
                    y: self.config.page_height - 15.0,
                    font_size: NOTE_FONT_SIZE,
                    color: FOOTNOTE_GRAY,
                    style: FontStyle::Normal,
                    align: TextAlign::Center,
                });
                instructions.push(DrawInstruction::Text {
                    text: FOOTER_ATTRIBUTION.to_string(),
                    x: center_x,
                    y: self.config.page_height - 10.0,
                    font_size: NOTE_FONT_SIZE,
                    color: FOOTNOTE_GRAY,
                    style: FontStyle::Normal,
                    align: TextAlign::Center,
                });
                Page {
                    number,
                    instructions,
                }
            })
            .collect()
    }
}

// Compiled once; export_filename runs per request.
fn filename_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("[^a-z0-9]+").expect("filename pattern is valid"))
}

/// Download name for the exported document: sanitized trip title plus the
/// export date.
pub fn export_filename(trip_title: &str, date: NaiveDate) -> String {
    let lowered = trip_title.to_lowercase();
    let slug = filename_pattern()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string();
    if slug.is_empty() {
        format!("unrushed-europe-itinerary-{}.pdf", date.format("%Y-%m-%d"))
    } else {
        format!(
            "unrushed-europe-itinerary-{}-{}.pdf",
            slug,
            date.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::itinerary::{Activity, DailyPlan, Itinerary};

    fn activity(name: &str, description: &str) -> Activity {
        Activity {
            name: name.to_string(),
            description: description.to_string(),
            accessibility_note: "Mostly flat, with benches along the way.".to_string(),
            estimated_cost: None,
            duration: None,
        }
    }

    fn day(number: u32) -> DailyPlan {
        DailyPlan {
            day: number,
            title: format!("Exploring day {}", number),
            morning_activity: activity(
                "Old Town Walk",
                "A slow wander through the medieval quarter with plenty of cafe stops.",
            ),
            afternoon_activity: activity(
                "River Cruise",
                "An unhurried boat ride past the city's main landmarks.",
            ),
            evening_suggestion: "Dinner at a quiet neighborhood bistro away from the crowds."
                .to_string(),
            restaurant_recommendations: None,
            transportation_tips: None,
        }
    }

    fn sample_itinerary(days: u32) -> Itinerary {
        Itinerary {
            trip_title: "Unrushed Week in Provence".to_string(),
            summary: "Seven gentle days of markets, villages and long lunches in the south of France."
                .to_string(),
            daily_plan: (1..=days).map(day).collect(),
        }
    }

    fn texts(page: &Page) -> Vec<&str> {
        page.instructions
            .iter()
            .filter_map(|i| match i {
                DrawInstruction::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_layout_is_deterministic() {
        let service = PdfLayoutService::new();
        let itinerary = sample_itinerary(7);
        assert_eq!(service.layout(&itinerary), service.layout(&itinerary));
    }

    #[test]
    fn test_empty_itinerary_is_a_single_page() {
        let service = PdfLayoutService::new();
        let itinerary = Itinerary {
            trip_title: "Somewhere, Sometime".to_string(),
            summary: "A plan with no days yet.".to_string(),
            daily_plan: vec![],
        };

        let pages = service.layout(&itinerary);
        assert_eq!(pages.len(), 1);

        let texts = texts(&pages[0]);
        assert!(texts.contains(&"Somewhere, Sometime"));
        assert!(texts.contains(&"A plan with no days yet."));
        assert!(texts.contains(&"Page 1 of 1"));
        assert!(texts.contains(&FOOTER_ATTRIBUTION));
        assert!(!texts.iter().any(|t| t.starts_with("Day ")));
    }

    #[test]
    fn test_long_itinerary_breaks_into_multiple_pages() {
        let service = PdfLayoutService::new();
        let pages = service.layout(&sample_itinerary(10));
        assert!(pages.len() > 1, "ten full days cannot fit one A4 page");

        // Page numbers are consecutive and reference the final total.
        let total = pages.len();
        for (index, page) in pages.iter().enumerate() {
            assert_eq!(page.number, index + 1);
            let expected = format!("Page {} of {}", index + 1, total);
            assert!(texts(page).contains(&expected.as_str()));
        }
    }

    #[test]
    fn test_content_stays_inside_usable_height() {
        let service = PdfLayoutService::new();
        let config = LayoutConfig::default();
        let pages = service.layout(&sample_itinerary(10));

        for page in &pages {
            for instruction in &page.instructions {
                if let DrawInstruction::Text { text, y, .. } = instruction {
                    // Only the two footer lines may sit below the bottom margin.
                    if *y > config.usable_bottom() {
                        assert!(
                            text.starts_with("Page ") || text == FOOTER_ATTRIBUTION,
                            "non-footer text below usable height: {:?}",
                            text
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_overflowing_block_moves_whole_to_next_page() {
        // Shrink the page so the summary cannot fit below the start cursor;
        // every wrapped summary line must then land together on page two.
        let config = LayoutConfig {
            page_width: 210.0,
            page_height: 80.0,
            margin: 10.0,
            start_y: 50.0,
        };
        let service = PdfLayoutService::with_config(config);
        let itinerary = Itinerary {
            trip_title: "Short".to_string(),
            summary: "An intentionally long summary that wraps onto several lines so that \
                      its total height exceeds what remains of the first page and the whole \
                      block has to move to the second page in one piece rather than being \
                      split somewhere in the middle of the paragraph."
                .to_string(),
            daily_plan: vec![],
        };

        let pages = service.layout(&itinerary);
        assert_eq!(pages.len(), 2);

        let summary_lines_on = |page: &Page| -> usize {
            page.instructions
                .iter()
                .filter(|i| {
                    matches!(
                        i,
                        DrawInstruction::Text { font_size, color, .. }
                            if *font_size == SUMMARY_FONT_SIZE && *color == MUTED
                    )
                })
                .count()
        };
        assert_eq!(summary_lines_on(&pages[0]), 0);
        assert!(summary_lines_on(&pages[1]) > 1);
    }

    #[test]
    fn test_label_moves_with_its_block_near_page_bottom() {
        // 90mm usable; a cursor at 82 leaves room for the label alone but
        // not for a single body line under it, so both must break together.
        let config = LayoutConfig {
            page_width: 210.0,
            page_height: 100.0,
            margin: 10.0,
            start_y: 82.0,
        };
        let service = PdfLayoutService::with_config(config);
        let mut builder = PageBuilder::new(&service.config);
        service.place_label(&mut builder, "MORNING", MORNING_BROWN, 15.0);
        service.place_block(
            &mut builder,
            "Coffee by the canal.",
            15.0,
            BODY_FONT_SIZE,
            BODY_LINE_HEIGHT,
            INK,
            FontStyle::Normal,
            TextAlign::Left,
            180.0,
        );

        let pages = builder.finish();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].is_empty(), "label must not stay behind alone");

        let second: Vec<&str> = pages[1]
            .iter()
            .filter_map(|i| match i {
                DrawInstruction::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(second.contains(&"MORNING"));
        assert!(second.contains(&"Coffee by the canal."));
    }

    #[test]
    fn test_block_taller_than_a_page_is_never_split() {
        // The summary wraps to more lines than a whole page holds; it still
        // has to land on a single page rather than being split.
        let config = LayoutConfig {
            page_width: 210.0,
            page_height: 60.0,
            margin: 10.0,
            start_y: 40.0,
        };
        let service = PdfLayoutService::with_config(config);
        let itinerary = Itinerary {
            trip_title: "Tall".to_string(),
            summary: "meander ".repeat(200).trim_end().to_string(),
            daily_plan: vec![],
        };

        let pages = service.layout(&itinerary);
        let pages_with_summary: Vec<usize> = pages
            .iter()
            .filter(|page| {
                page.instructions.iter().any(|i| {
                    matches!(
                        i,
                        DrawInstruction::Text { font_size, color, .. }
                            if *font_size == SUMMARY_FONT_SIZE && *color == MUTED
                    )
                })
            })
            .map(|page| page.number)
            .collect();
        assert_eq!(pages_with_summary.len(), 1);
    }

    #[test]
    fn test_day_header_not_orphaned_at_page_bottom() {
        let service = PdfLayoutService::new();
        let config = LayoutConfig::default();
        let pages = service.layout(&sample_itinerary(10));

        for page in &pages {
            for instruction in &page.instructions {
                if let DrawInstruction::Text { text, y, font_size, .. } = instruction {
                    if *font_size == DAY_HEADER_FONT_SIZE && text.starts_with("Day ") {
                        assert!(
                            config.usable_bottom() - *y >= DAY_HEADER_MIN_REMAINING - DAY_HEADER_ADVANCE,
                            "day header too close to page bottom: {:?} at y={}",
                            text,
                            y
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty_accessibility_note_is_skipped() {
        let service = PdfLayoutService::new();
        let mut itinerary = sample_itinerary(1);
        itinerary.daily_plan[0].morning_activity.accessibility_note = String::new();
        itinerary.daily_plan[0].afternoon_activity.accessibility_note = "  ".to_string();

        let pages = service.layout(&itinerary);
        let all_texts: Vec<&str> = pages.iter().flat_map(|p| texts(p)).collect();
        assert!(!all_texts.iter().any(|t| t.starts_with("Accessibility:")));
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text(
            "one two three four five six seven eight nine ten",
            20.0,
            BODY_FONT_SIZE,
        );
        let budget = max_chars_per_line(20.0, BODY_FONT_SIZE);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= budget);
        }
    }

    #[test]
    fn test_wrap_text_splits_oversized_words() {
        let word = "a".repeat(500);
        let lines = wrap_text(&word, 30.0, BODY_FONT_SIZE);
        let budget = max_chars_per_line(30.0, BODY_FONT_SIZE);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= budget);
        }
    }

    #[test]
    fn test_wrap_text_blank_input_has_no_lines() {
        assert!(wrap_text("", 170.0, BODY_FONT_SIZE).is_empty());
        assert!(wrap_text("   ", 170.0, BODY_FONT_SIZE).is_empty());
    }

    #[test]
    fn test_export_filename_sanitizes_title() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(
            export_filename("A Week in Provence!", date),
            "unrushed-europe-itinerary-a-week-in-provence-2026-08-30.pdf"
        );
        assert_eq!(
            export_filename("***", date),
            "unrushed-europe-itinerary-2026-08-30.pdf"
        );
    }
}
