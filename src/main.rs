//! PodShelf - a desktop podcast browser
//! Fetches show details from a remote catalog and renders seasons and episodes

// Hide console window on Windows release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Use mimalloc for faster memory allocation (Linux, macOS)
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

mod api;
mod config;
mod detail;
mod genres;
mod models;

use api::{CatalogClient, DEFAULT_CATALOG_URL};
use config::AppConfig;
use detail::{DetailView, ShowState};
use genres::{catalog_genres, resolve_genre_labels};
use models::{GenreRef, Season, Show};

/// Get current time as HH:MM:SS (UTC)
fn timestamp_now() -> String {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let secs = now % 86400;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Render the application icon: a microphone on a rounded purple card
fn load_icon() -> egui::IconData {
    let size: usize = 64;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let nx = x as f32 / size as f32;
            let ny = y as f32 / size as f32;

            // Rounded rectangle background
            let corner = 0.125;
            let dx = if nx < corner {
                corner - nx
            } else if nx > 1.0 - corner {
                nx - (1.0 - corner)
            } else {
                0.0
            };
            let dy = if ny < corner {
                corner - ny
            } else if ny > 1.0 - corner {
                ny - (1.0 - corner)
            } else {
                0.0
            };
            if dx * dx + dy * dy > corner * corner {
                continue; // transparent outside the card
            }

            // Purple gradient card (#667eea to #764ba2)
            let t = nx * 0.5 + ny * 0.5;
            let (mut r, mut g, mut b) = (
                (102.0 + 16.0 * t) as u8,
                (126.0 - 51.0 * t) as u8,
                (234.0 - 72.0 * t) as u8,
            );

            // Microphone capsule
            let cap = ((nx - 0.5) / 0.14).powi(2) + ((ny - 0.38) / 0.22).powi(2);
            // Stand arc and base
            let arc = ((nx - 0.5) / 0.22).powi(2) + ((ny - 0.42) / 0.3).powi(2);
            let in_arc = arc <= 1.0 && arc >= 0.72 && ny > 0.45;
            let in_stem = (nx - 0.5).abs() < 0.03 && ny > 0.68 && ny < 0.82;
            let in_base = (nx - 0.5).abs() < 0.14 && (ny - 0.84).abs() < 0.03;

            if cap <= 1.0 || in_arc || in_stem || in_base {
                r = 245;
                g = 245;
                b = 250;
            }

            rgba[idx] = r;
            rgba[idx + 1] = g;
            rgba[idx + 2] = b;
            rgba[idx + 3] = 255;
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}

/// Extend the default fonts with a system emoji face where one exists
fn install_emoji_fonts(ctx: &egui::Context) {
    let candidates: &[&str] = if cfg!(target_os = "windows") {
        &["C:\\Windows\\Fonts\\seguiemj.ttf"]
    } else if cfg!(target_os = "macos") {
        &["/System/Library/Fonts/Apple Color Emoji.ttc"]
    } else {
        &[
            "/usr/share/fonts/truetype/noto/NotoColorEmoji.ttf",
            "/usr/share/fonts/noto-emoji/NotoColorEmoji.ttf",
            "/usr/share/fonts/google-noto-emoji/NotoColorEmoji.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        ]
    };

    let mut fonts = egui::FontDefinitions::default();
    for path in candidates {
        if let Ok(font_data) = std::fs::read(path) {
            fonts.font_data.insert(
                "emoji".to_owned(),
                egui::FontData::from_owned(font_data).into(),
            );
            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .push("emoji".to_owned());
            break;
        }
    }
    ctx.set_fonts(fonts);
}

/// Background task messages
enum TaskResult {
    /// Fetch finished, tagged with the show id it was issued for.
    /// `show` is None when the catalog had no record for the id.
    ShowLoaded { show_id: String, show: Option<Show> },
    /// Fetch failed, same tag rules
    ShowFailed { show_id: String, message: String },
}

fn main() -> Result<(), eframe::Error> {
    // Force X11 backend on Linux before any windowing code runs
    #[cfg(target_os = "linux")]
    {
        std::env::set_var("WINIT_UNIX_BACKEND", "x11");
        std::env::remove_var("WAYLAND_DISPLAY");
    }

    let icon = load_icon();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([820.0, 520.0])
            .with_icon(icon),
        vsync: true,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        ..Default::default()
    };

    eframe::run_native(
        "PodShelf - Podcast Browser",
        options,
        Box::new(|cc| {
            install_emoji_fonts(&cc.egui_ctx);
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(PodShelfApp::new()))
        }),
    )
}

struct PodShelfApp {
    // Navigation
    show_id_input: String,
    detail: Option<DetailView>,

    // Reference data owned by the shell, passed into the detail view
    genre_table: Vec<GenreRef>,

    // Background task channel
    task_receiver: Receiver<TaskResult>,
    task_sender: Sender<TaskResult>,

    // Shell state
    status_message: String,
    console_log: Vec<String>,
    show_console: bool,
    show_settings: bool,
    dark_mode: bool,
    catalog_url_input: String,
    config: AppConfig,
}

impl PodShelfApp {
    fn new() -> Self {
        let (task_sender, task_receiver) = channel();
        let config = AppConfig::load();

        Self {
            show_id_input: String::new(),
            detail: None,
            genre_table: catalog_genres(),
            task_receiver,
            task_sender,
            status_message: "Enter a show id to get started".to_string(),
            console_log: Vec::new(),
            show_console: false,
            show_settings: false,
            dark_mode: config.dark_mode,
            catalog_url_input: config.catalog_url.clone(),
            config,
        }
    }

    fn log(&mut self, message: &str) {
        let timestamp = timestamp_now();
        self.console_log.push(format!("[{}] {}", timestamp, message));
        // Keep last 500 lines
        if self.console_log.len() > 500 {
            self.console_log.remove(0);
        }
    }

    fn loading(&self) -> bool {
        self.detail.as_ref().is_some_and(|view| view.loading())
    }

    /// Open a show by identifier. Replaces whatever is on screen with a
    /// fresh Loading view and spawns the single fetch for this navigation.
    fn open_show(&mut self, show_id: &str) {
        let show_id = show_id.trim().to_string();
        if show_id.is_empty() {
            self.status_message = "Please enter a show id".to_string();
            return;
        }

        self.log(&format!("[INFO] Opening show {}", show_id));
        self.status_message = format!("Loading show {}...", show_id);
        self.detail = Some(DetailView::open(&show_id));

        let catalog_url = self.config.catalog_url.clone();
        let sender = self.task_sender.clone();

        thread::spawn(move || {
            let client = CatalogClient::new(&catalog_url);
            let message = match client.get_show(&show_id) {
                Ok(show) => TaskResult::ShowLoaded { show_id, show },
                Err(e) => TaskResult::ShowFailed {
                    show_id,
                    message: e.to_string(),
                },
            };
            let _ = sender.send(message);
        });
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::ShowLoaded { show_id, show } => {
                let title = show.as_ref().map(|s| s.title.clone());
                let applied = match self.detail.as_mut() {
                    Some(view) => view.finish(&show_id, Ok(show)),
                    None => false,
                };

                if !applied {
                    self.log(&format!("[WARN] Discarding stale result for show {}", show_id));
                } else if let Some(title) = title {
                    self.log(&format!("[INFO] Loaded show {} ({})", show_id, title));
                    self.status_message = format!("Loaded {}", title);
                    self.config.remember_show(&show_id, &title);
                    self.config.save();
                } else {
                    self.log(&format!("[WARN] Show {} not found in catalog", show_id));
                    self.status_message = format!("Show {} not found", show_id);
                }
            }
            TaskResult::ShowFailed { show_id, message } => {
                let applied = match self.detail.as_mut() {
                    Some(view) => view.finish(&show_id, Err(message.clone())),
                    None => false,
                };

                if applied {
                    self.log(&format!("[ERROR] Show {} fetch failed: {}", show_id, message));
                    self.status_message = format!("Error: {}", message);
                } else {
                    self.log(&format!("[WARN] Discarding stale error for show {}", show_id));
                }
            }
        }
    }

    fn show_home_screen(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);
            ui.heading("🎙 PodShelf");
            ui.add_space(20.0);

            if self.config.recent_shows.is_empty() {
                ui.label("Type a show id in the toolbar and press Open");
                ui.label(
                    egui::RichText::new("Recently opened shows will appear here").weak(),
                );
            } else {
                ui.label("Pick up where you left off:");
                ui.add_space(10.0);

                let mut to_open: Option<String> = None;
                for recent in &self.config.recent_shows {
                    if ui
                        .button(format!("🎙 {} ({})", recent.title, recent.id))
                        .clicked()
                    {
                        to_open = Some(recent.id.clone());
                    }
                }

                if let Some(id) = to_open {
                    self.show_id_input = id.clone();
                    self.open_show(&id);
                }
            }
        });
    }

    fn show_detail_view(&mut self, ui: &mut egui::Ui) {
        let (state, selected) = match &self.detail {
            Some(view) => (view.state.clone(), view.selected_season),
            None => return,
        };

        match state {
            ShowState::Loading => {
                ui.vertical_centered(|ui| {
                    ui.add_space(100.0);
                    ui.spinner();
                    ui.add_space(10.0);
                    ui.label("Loading podcast details...");
                });
            }
            ShowState::Error(message) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(100.0);
                    ui.label(
                        egui::RichText::new(format!("Error: {}", message))
                            .color(egui::Color32::LIGHT_RED),
                    );
                });
            }
            ShowState::NotFound => {
                ui.vertical_centered(|ui| {
                    ui.add_space(100.0);
                    ui.label("Show not found.");
                });
            }
            ShowState::Loaded(show) => {
                let mut clicked_season: Option<usize> = None;
                self.render_loaded_show(ui, &show, selected, &mut clicked_season);

                if let Some(index) = clicked_season {
                    if let Some(view) = self.detail.as_mut() {
                        view.select_season(index);
                    }
                }
            }
        }
    }

    fn render_loaded_show(
        &self,
        ui: &mut egui::Ui,
        show: &Show,
        selected: usize,
        clicked_season: &mut Option<usize>,
    ) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.heading(&show.title);
                    if !show.image.trim().is_empty() {
                        ui.hyperlink_to("🖼 Cover", &show.image);
                    }
                });
                ui.add_space(6.0);
                ui.label(&show.description);
                ui.add_space(10.0);

                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new("GENRES").weak().size(12.0));
                    for label in resolve_genre_labels(&show.genres, &self.genre_table) {
                        ui.label(
                            egui::RichText::new(format!(" {} ", label))
                                .background_color(ui.visuals().faint_bg_color),
                        );
                    }
                });
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new("LAST UPDATED").weak().size(12.0));
                    ui.label(detail::format_updated(&show.updated));
                    ui.separator();
                    ui.label(format!("{} Seasons", show.seasons.len()));
                    ui.separator();
                    ui.label(format!("{} Episodes", show.episodes));
                });

                ui.add_space(10.0);
                ui.separator();
                ui.heading("Seasons");

                ui.horizontal_wrapped(|ui| {
                    for (index, season) in show.seasons.iter().enumerate() {
                        if ui
                            .selectable_label(index == selected, format!("Season {}", season.season))
                            .clicked()
                        {
                            *clicked_season = Some(index);
                        }
                    }
                });
                ui.add_space(8.0);

                match detail::current_season(show, selected) {
                    Some(season) => self.render_season(ui, show, season),
                    None => {
                        ui.label(
                            egui::RichText::new("No episodes found for this season.").weak(),
                        );
                    }
                }
            });
    }

    fn render_season(&self, ui: &mut egui::Ui, show: &Show, season: &Season) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(detail::season_heading(season))
                    .strong()
                    .size(18.0),
            );
            if let Some(url) = detail::season_artwork(season, show) {
                ui.hyperlink_to("🖼", url);
            }
        });
        if let Some(text) = &season.description {
            ui.label(text);
        }
        ui.label(egui::RichText::new(format!("{} Episodes", season.episodes.len())).weak());
        ui.add_space(6.0);

        if season.episodes.is_empty() {
            ui.label(egui::RichText::new("No episodes found for this season.").weak());
            return;
        }

        for episode in &season.episodes {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("S{}E{}", season.season, episode.episode))
                            .strong()
                            .color(egui::Color32::GRAY),
                    );
                    ui.label(egui::RichText::new(&episode.title).strong());
                    if let Some(url) = detail::episode_artwork(episode, season, show) {
                        ui.hyperlink_to("🖼", url);
                    }
                });

                if let Some(text) = &episode.description {
                    ui.label(detail::truncate_blurb(text));
                }

                let mut meta: Vec<String> = Vec::new();
                if let Some(file) = &episode.file {
                    meta.push(detail::format_minutes(file.duration));
                }
                if let Some(date) = &episode.date {
                    meta.push(detail::format_episode_date(date));
                }
                if !meta.is_empty() {
                    ui.label(egui::RichText::new(meta.join(" • ")).weak());
                }
            });
            ui.add_space(4.0);
        }
    }

    fn show_console_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_console;
        egui::Window::new("Console")
            .open(&mut open)
            .default_width(520.0)
            .show(ctx, |ui| {
                if ui.button("Clear").clicked() {
                    self.console_log.clear();
                }
                ui.separator();
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .max_height(300.0)
                    .show(ui, |ui| {
                        for line in &self.console_log {
                            ui.label(egui::RichText::new(line).monospace().size(12.0));
                        }
                    });
            });
        self.show_console = open;
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings;
        let mut applied_url: Option<String> = None;

        egui::Window::new("Settings")
            .open(&mut open)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.label("Catalog URL:");
                ui.text_edit_singleline(&mut self.catalog_url_input);
                ui.horizontal(|ui| {
                    if ui.button("Apply").clicked() {
                        let url = self
                            .catalog_url_input
                            .trim()
                            .trim_end_matches('/')
                            .to_string();
                        if !url.is_empty() {
                            applied_url = Some(url);
                        }
                    }
                    if ui.button("Reset to default").clicked() {
                        applied_url = Some(DEFAULT_CATALOG_URL.to_string());
                        self.catalog_url_input = DEFAULT_CATALOG_URL.to_string();
                    }
                });
                ui.separator();
                ui.checkbox(&mut self.dark_mode, "Dark mode");
            });

        if let Some(url) = applied_url {
            self.config.catalog_url = url;
            self.config.save();
            self.log(&format!("[INFO] Catalog URL set to {}", self.config.catalog_url));
        }
        self.show_settings = open;
    }
}

impl eframe::App for PodShelfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process background task results (non-blocking)
        while let Ok(result) = self.task_receiver.try_recv() {
            self.handle_task_result(result);
        }

        ctx.set_visuals(if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        if self.config.dark_mode != self.dark_mode {
            self.config.dark_mode = self.dark_mode;
            self.config.save();
        }

        // Top panel - Toolbar
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.heading("🎙 PodShelf");
                ui.separator();

                if ui.button("🏠 Home").clicked() {
                    self.detail = None;
                    self.status_message = "Enter a show id to get started".to_string();
                }
                ui.separator();

                ui.label("Show id:");
                let input = ui.add(
                    egui::TextEdit::singleline(&mut self.show_id_input).desired_width(140.0),
                );
                let submitted =
                    input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Open").clicked() || submitted {
                    let id = self.show_id_input.clone();
                    self.open_show(&id);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.checkbox(&mut self.dark_mode, "Dark");
                    if ui.button("🖥 Console").clicked() {
                        self.show_console = !self.show_console;
                    }
                    if ui.button("⚙ Settings").clicked() {
                        self.show_settings = !self.show_settings;
                    }
                });
            });
            ui.add_space(5.0);
        });

        // Bottom panel - Status
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.loading() {
                    ui.spinner();
                }
                ui.label(&self.status_message);
            });
        });

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.detail.is_some() {
                self.show_detail_view(ui);
            } else {
                self.show_home_screen(ui);
            }
        });

        if self.show_console {
            self.show_console_window(ctx);
        }
        if self.show_settings {
            self.show_settings_window(ctx);
        }

        // Keep polling the task channel while a fetch is in flight
        if self.loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
