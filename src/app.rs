//! Main application UI.
//! Translates clicks and key presses into deck intents and repaints from the
//! deck's display state. Owns nothing but view concerns.

use crate::export::json::{export_deck_to_path, read_import_file};
use crate::models::{DeckManager, Intent, StatusKind, StatusMessage};
use crate::database::SqliteStore;
use eframe::egui;

const EXAMPLE_JSON: &str = r#"[
  {"front": "2+2", "back": "4"},
  {"front": "Capital of France", "back": "Paris"}
]"#;

/// Maps a key press to an intent. Nothing fires while a text field is focused.
fn key_intent(key: egui::Key, text_input_focused: bool) -> Option<Intent> {
    if text_input_focused {
        return None;
    }
    match key {
        egui::Key::Space => Some(Intent::Flip),
        egui::Key::ArrowRight => Some(Intent::Next),
        egui::Key::ArrowLeft => Some(Intent::Previous),
        _ => None,
    }
}

pub struct FlashcardApp {
    deck: DeckManager<SqliteStore>,
    json_input: String,
    show_example: bool,
    show_clear_dialog: bool,
    status: Option<StatusMessage>,
}

impl eframe::App for FlashcardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.show_clear_dialog {
            self.handle_keys(ctx);
        }

        self.render_main_screen(ctx);

        if self.show_clear_dialog {
            let mut confirmed = false;
            let mut cancelled = false;

            egui::Window::new("Clear all flashcards?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(format!("{} cards will be removed.", self.deck.cards().len()));
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            cancelled = true;
                        }
                        if ui.button("Yes").clicked() {
                            confirmed = true;
                        }
                    });
                });

            if cancelled {
                self.show_clear_dialog = false;
            }
            if confirmed {
                self.show_clear_dialog = false;
                self.dispatch(Intent::Clear { confirmed: true });
            }
        }
    }
}

impl FlashcardApp {
    pub fn new(deck: DeckManager<SqliteStore>) -> Self {
        Self {
            deck,
            json_input: String::new(),
            show_example: false,
            show_clear_dialog: false,
            status: None,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let text_input_focused = ctx.wants_keyboard_input();
        let intents: Vec<Intent> = ctx.input(|i| {
            [egui::Key::Space, egui::Key::ArrowRight, egui::Key::ArrowLeft]
                .into_iter()
                .filter(|key| i.key_pressed(*key))
                .filter_map(|key| key_intent(key, text_input_focused))
                .collect()
        });
        for intent in intents {
            self.dispatch(intent);
        }
    }

    /// Forwards an intent to the deck and picks up its outcome message
    fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::Import(raw) => {
                if self.deck.import_deck(&raw).is_ok() {
                    self.json_input.clear();
                }
                self.status = self.deck.status().cloned();
            }
            Intent::Clear { confirmed } => {
                if self.deck.clear_deck(confirmed) {
                    self.status = self.deck.status().cloned();
                } else {
                    self.show_clear_dialog = true;
                }
            }
            other => self.deck.apply(other),
        }
    }

    /// Renders the import controls and the card viewer
    fn render_main_screen(&mut self, ctx: &egui::Context) {
        // Actions run after rendering to avoid borrowing conflicts
        let mut action: Option<Intent> = None;
        let mut action_open_file = false;
        let mut action_export = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Flashcards");
            ui.separator();

            ui.add(
                egui::TextEdit::multiline(&mut self.json_input)
                    .hint_text(r#"Paste JSON: [{"front": "...", "back": "..."}]"#)
                    .desired_rows(5)
                    .desired_width(f32::INFINITY)
                    .code_editor(),
            );

            ui.horizontal(|ui| {
                if ui.button("Import").clicked() {
                    action = Some(Intent::Import(self.json_input.clone()));
                }
                if ui.button("Open File").clicked() {
                    action_open_file = true;
                }
                if ui.button("Export").clicked() {
                    action_export = true;
                }
                let example_label = if self.show_example {
                    "Hide Example"
                } else {
                    "Show Example"
                };
                if ui.button(example_label).clicked() {
                    self.show_example = !self.show_example;
                }
                if ui.button("Clear Deck").clicked() {
                    action = Some(Intent::Clear { confirmed: false });
                }
            });

            if self.show_example {
                ui.group(|ui| {
                    ui.monospace(EXAMPLE_JSON);
                });
            }

            if let Some(status) = &self.status {
                let color = match status.kind {
                    StatusKind::Success => egui::Color32::from_rgb(46, 160, 67),
                    StatusKind::Error => egui::Color32::from_rgb(218, 54, 51),
                };
                ui.colored_label(color, &status.text);
            }

            ui.separator();

            let view = self.deck.display();
            if !view.has_cards {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.label("No cards yet. Paste a JSON array above and click Import.");
                });
                return;
            }

            if let Some((current, total)) = view.position {
                ui.label(format!("Card {current} / {total}"));
            }

            let (side, text) = if view.flipped {
                ("Back", &view.back_text)
            } else {
                ("Front", &view.front_text)
            };

            ui.small(side);
            let card = egui::Button::new(egui::RichText::new(text).size(24.0))
                .min_size(egui::vec2(ui.available_width(), 220.0));
            if ui
                .add(card)
                .on_hover_text("Click or press Space to flip")
                .clicked()
            {
                action = Some(Intent::Flip);
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("◀ Previous").clicked() {
                    action = Some(Intent::Previous);
                }
                if ui.button("Shuffle").clicked() {
                    action = Some(Intent::Shuffle);
                }
                if ui.button("Next ▶").clicked() {
                    action = Some(Intent::Next);
                }
            });

            ui.add_space(10.0);
            ui.small("Space: flip, ← / →: previous / next");
        });

        // Execute deferred actions
        if action_open_file {
            self.handle_open_file();
        }
        if action_export {
            self.handle_export();
        }
        if let Some(intent) = action {
            self.dispatch(intent);
        }
    }

    /// Loads a JSON file into the input box and imports it
    fn handle_open_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };

        match read_import_file(&path) {
            Ok(contents) => {
                self.json_input = contents.clone();
                self.dispatch(Intent::Import(contents));
            }
            Err(e) => {
                self.status = Some(StatusMessage::error(format!("Error: {e}")));
            }
        }
    }

    /// Saves the current deck as an importable JSON file
    fn handle_export(&mut self) {
        if self.deck.is_empty() {
            self.status = Some(StatusMessage::error("Error: no cards to export"));
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .set_file_name("flashcards.json")
            .add_filter("JSON files", &["json"])
            .save_file()
        else {
            return;
        };

        self.status = Some(match export_deck_to_path(self.deck.cards(), &path) {
            Ok(()) => StatusMessage::success(format!(
                "Exported {} cards to {}",
                self.deck.cards().len(),
                path.display()
            )),
            Err(e) => StatusMessage::error(format!("Export failed: {e}")),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(key_intent(egui::Key::Space, false), Some(Intent::Flip));
        assert_eq!(key_intent(egui::Key::ArrowRight, false), Some(Intent::Next));
        assert_eq!(key_intent(egui::Key::ArrowLeft, false), Some(Intent::Previous));
        assert_eq!(key_intent(egui::Key::Enter, false), None);
    }

    #[test]
    fn test_keys_ignored_while_typing() {
        assert_eq!(key_intent(egui::Key::Space, true), None);
        assert_eq!(key_intent(egui::Key::ArrowRight, true), None);
        assert_eq!(key_intent(egui::Key::ArrowLeft, true), None);
    }

    #[test]
    fn test_example_payload_imports() {
        let mut app = FlashcardApp::new(DeckManager::new(SqliteStore::open_in_memory().unwrap()));
        app.json_input = EXAMPLE_JSON.to_string();

        app.dispatch(Intent::Import(app.json_input.clone()));

        assert_eq!(app.deck.cards().len(), 2);
        assert!(app.json_input.is_empty());
        assert_eq!(app.status.as_ref().unwrap().text, "✓ Imported 2 cards!");
    }

    #[test]
    fn test_unconfirmed_clear_opens_dialog() {
        let mut app = FlashcardApp::new(DeckManager::new(SqliteStore::open_in_memory().unwrap()));
        app.dispatch(Intent::Import(EXAMPLE_JSON.to_string()));

        app.dispatch(Intent::Clear { confirmed: false });
        assert!(app.show_clear_dialog);
        assert_eq!(app.deck.cards().len(), 2);

        app.show_clear_dialog = false;
        app.dispatch(Intent::Clear { confirmed: true });
        assert!(app.deck.is_empty());
        assert_eq!(app.status.as_ref().unwrap().text, "Deck cleared.");
    }

    #[test]
    fn test_failed_import_keeps_input() {
        let mut app = FlashcardApp::new(DeckManager::new(SqliteStore::open_in_memory().unwrap()));
        app.json_input = r#"[{"front":"A"}]"#.to_string();

        app.dispatch(Intent::Import(app.json_input.clone()));

        assert_eq!(app.json_input, r#"[{"front":"A"}]"#);
        assert!(app.status.as_ref().unwrap().is_error());
    }
}
