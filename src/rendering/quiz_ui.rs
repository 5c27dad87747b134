//! Bevy UI for the quiz. Every node is absolutely positioned from the
//! session's [`LayoutGeometry`](crate::rendering::layout::LayoutGeometry); the
//! UI only reads session state.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::gameplay::{ButtonHighlight, QuizSession, SessionStats};
use crate::rendering::layout::{label_font_size, Anchor, FontSizes, PixelRect};
use crate::rendering::palette;

pub const TITLE: &str = "Brick Colour Quiz";
pub const PROMPT: &str = "Which brick colour is this?";

/// Role of a quiz UI node; buttons and labels carry their option index.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizNode {
    Title,
    StatLine1,
    StatLine2,
    Prompt,
    Footer,
    SwatchCard,
    SwatchFill,
    Button(usize),
    Label(usize),
}

pub fn stat_lines(stats: &SessionStats) -> [String; 2] {
    [
        format!("Score: {}    Rounds: {}", stats.score, stats.rounds),
        format!(
            "Accuracy: {:.0}%    Streak: {}",
            stats.accuracy() * 100.0,
            stats.streak
        ),
    ]
}

pub fn footer_hint(choice_count: usize) -> String {
    format!("Click or press 1–{}. ESC to quit.", choice_count.clamp(1, 9))
}

pub fn option_label(index: usize, name: &str) -> String {
    format!("{}. {}", index + 1, name)
}

fn text_line(role: QuizNode, size: f32, color: Color) -> impl Bundle {
    (
        role,
        Text::new(""),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            width: Val::Percent(100.0),
            ..default()
        },
    )
}

pub fn spawn_quiz_ui(mut commands: Commands, session: Res<QuizSession>) {
    let fonts = session.fonts();
    // built without tonemapping LUTs
    commands.spawn((Name::new("QuizCamera"), Camera2d, Tonemapping::None));

    commands.spawn(text_line(QuizNode::Title, fonts.title, palette::TEXT));
    commands.spawn(text_line(QuizNode::StatLine1, fonts.stat, palette::TEXT_DIM));
    commands.spawn(text_line(QuizNode::StatLine2, fonts.stat, palette::TEXT_DIM));
    commands.spawn(text_line(QuizNode::Prompt, fonts.stat, palette::TEXT));
    commands.spawn(text_line(QuizNode::Footer, fonts.footer, palette::TEXT_DIM));

    commands
        .spawn((
            Name::new("SwatchCard"),
            QuizNode::SwatchCard,
            Node {
                position_type: PositionType::Absolute,
                border: UiRect::all(Val::Px(palette::CARD_BORDER)),
                padding: UiRect::all(Val::Px(palette::SWATCH_INSET - palette::CARD_BORDER)),
                ..default()
            },
            BackgroundColor(palette::CARD),
            BorderColor(palette::CARD_EDGE),
            BorderRadius::all(Val::Px(palette::CARD_RADIUS)),
        ))
        .with_children(|card| {
            card.spawn((
                QuizNode::SwatchFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(palette::swatch_color(&session.round().swatch_color)),
                BorderRadius::all(Val::Px(palette::SWATCH_RADIUS)),
            ));
        });

    for i in 0..session.choice_count() {
        commands
            .spawn((
                Name::new(format!("AnswerButton{}", i + 1)),
                QuizNode::Button(i),
                Node {
                    position_type: PositionType::Absolute,
                    border: UiRect::all(Val::Px(palette::BUTTON_BORDER)),
                    padding: UiRect::horizontal(Val::Px(20.0)),
                    align_items: AlignItems::Center,
                    overflow: Overflow::clip(),
                    ..default()
                },
                BackgroundColor(palette::BUTTON),
                BorderColor(palette::CARD_EDGE),
                BorderRadius::all(Val::Px(palette::BUTTON_RADIUS)),
            ))
            .with_children(|button| {
                button.spawn((
                    QuizNode::Label(i),
                    Text::new(""),
                    TextFont {
                        font_size: fonts.label,
                        ..default()
                    },
                    TextColor(palette::TEXT),
                ));
            });
    }
    info!(target: "quiz", "Quiz UI spawned with {} answer buttons", session.choice_count());
}

fn place_rect(node: &mut Node, rect: PixelRect) {
    node.left = Val::Px(rect.x as f32);
    node.top = Val::Px(rect.y as f32);
    node.width = Val::Px(rect.width as f32);
    node.height = Val::Px(rect.height as f32);
}

// Text lines span the full width and centre on the anchor vertically.
fn place_line(node: &mut Node, anchor: Anchor, line_height: i32) {
    node.top = Val::Px((anchor.y - line_height / 2) as f32);
}

fn set_text(text: Option<Mut<Text>>, value: &str) {
    if let Some(mut text) = text {
        if text.0 != value {
            text.0 = value.to_string();
        }
    }
}

fn set_font_size(font: Option<Mut<TextFont>>, size: f32) {
    if let Some(mut font) = font {
        if font.font_size != size {
            font.font_size = size;
        }
    }
}

/// Pushes layout, texts and feedback borders into the UI. Runs only on frames
/// where the session changed.
pub fn sync_quiz_ui(
    session: Res<QuizSession>,
    mut nodes: Query<(
        &QuizNode,
        &mut Node,
        Option<&mut Text>,
        Option<&mut TextFont>,
        Option<&mut BackgroundColor>,
        Option<&mut BorderColor>,
    )>,
) {
    let layout = session.layout();
    let fonts: &FontSizes = session.fonts();
    let metrics = fonts.metrics();
    let round = session.round();
    let [stat1, stat2] = stat_lines(session.stats());

    for (role, mut node, text, font, background, border) in &mut nodes {
        match *role {
            QuizNode::Title => {
                place_line(&mut node, layout.title, metrics.title);
                set_text(text, TITLE);
                set_font_size(font, fonts.title);
            }
            QuizNode::StatLine1 => {
                place_line(&mut node, layout.stat_line1, metrics.stat);
                set_text(text, &stat1);
                set_font_size(font, fonts.stat);
            }
            QuizNode::StatLine2 => {
                place_line(&mut node, layout.stat_line2, metrics.stat);
                set_text(text, &stat2);
                set_font_size(font, fonts.stat);
            }
            QuizNode::Prompt => {
                place_line(&mut node, layout.prompt, metrics.stat);
                set_text(text, PROMPT);
                set_font_size(font, fonts.stat);
            }
            QuizNode::Footer => {
                place_line(&mut node, layout.footer, metrics.footer);
                set_text(text, &footer_hint(session.choice_count()));
                set_font_size(font, fonts.footer);
            }
            QuizNode::SwatchCard => place_rect(&mut node, layout.swatch),
            QuizNode::SwatchFill => {
                if let Some(mut bg) = background {
                    bg.set_if_neq(BackgroundColor(palette::swatch_color(&round.swatch_color)));
                }
            }
            QuizNode::Button(i) => {
                if let Some(rect) = layout.buttons.get(i) {
                    place_rect(&mut node, *rect);
                }
                let (color, width) = match session.highlight(i) {
                    ButtonHighlight::None => (palette::CARD_EDGE, palette::BUTTON_BORDER),
                    ButtonHighlight::Correct => (palette::OK, palette::FEEDBACK_BORDER),
                    ButtonHighlight::Wrong => (palette::BAD, palette::FEEDBACK_BORDER),
                };
                node.border = UiRect::all(Val::Px(width));
                if let Some(mut b) = border {
                    b.set_if_neq(BorderColor(color));
                }
            }
            QuizNode::Label(i) => {
                let label = option_label(i, round.option(i).unwrap_or_default());
                let width = layout.buttons.get(i).map(|r| r.width).unwrap_or_default();
                set_font_size(font, label_font_size(&label, width, fonts.label));
                set_text(text, &label);
            }
        }
    }
}

/// Hover tint for the answer button under the cursor.
pub fn update_button_hover(
    session: Res<QuizSession>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut buttons: Query<(&QuizNode, &mut BackgroundColor)>,
) {
    let hovered = windows
        .single()
        .ok()
        .and_then(|w| w.cursor_position())
        .and_then(|p| session.layout().button_at(p.x, p.y));
    for (role, mut bg) in &mut buttons {
        if let QuizNode::Button(i) = *role {
            let color = if hovered == Some(i) {
                palette::BUTTON_HOVER
            } else {
                palette::BUTTON
            };
            bg.set_if_neq(BackgroundColor(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_lines_format_accuracy_as_percent() {
        let stats = SessionStats {
            rounds: 3,
            score: 2,
            streak: 1,
            ..Default::default()
        };
        let [a, b] = stat_lines(&stats);
        assert_eq!(a, "Score: 2    Rounds: 3");
        assert_eq!(b, "Accuracy: 67%    Streak: 1");
        let [_, empty] = stat_lines(&SessionStats::default());
        assert_eq!(empty, "Accuracy: 0%    Streak: 0");
    }

    #[test]
    fn footer_and_labels() {
        assert_eq!(footer_hint(4), "Click or press 1–4. ESC to quit.");
        assert_eq!(footer_hint(12), "Click or press 1–9. ESC to quit.");
        assert_eq!(option_label(0, "Dark Tan"), "1. Dark Tan");
    }
}
