#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod anim;
mod assets;
mod camera;
mod carousel;
mod colors;
mod constants;
mod content_watcher;
mod diagram;
mod hero;
mod nav;
mod sections;
mod stats;
mod ui;

use assets::{Assets, MediaLibrary};
use carousel::ProjectsCarousel;
use clap::Parser;
use content_watcher::ContentWatcher;
use diagram::DiagramView;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use hero::HeroSection;
use nav::NavState;
use sections::StaticSections;
use southside_showcase::SiteContent;
use stats::StatsSection;

#[derive(Parser, Debug)]
#[command(
    name = "southside-showcase",
    about = "Desktop showcase for South Side Studios"
)]
struct Args {
    /// Skip animated transitions: hard cuts, instant counters
    #[arg(long)]
    reduced_motion: bool,
    /// Reload assets/content.ron when it changes on disk
    #[arg(long)]
    watch_content: bool,
}

/// Main application state for the showcase.
pub struct ShowcaseApp {
    content: SiteContent,
    media: MediaLibrary,
    nav: NavState,
    hero: HeroSection,
    stats: StatsSection,
    diagram: DiagramView,
    carousel: ProjectsCarousel,
    statics: StaticSections,
    toasts: Toasts,
    content_watcher: Option<ContentWatcher>,
    reduced_motion: bool,
    scroll_offset: f32,
    scroll_progress: f32,
}

impl ShowcaseApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        args: &Args,
    ) -> Result<Self, assets::ContentLoadError> {
        let content = assets::load_content()?;
        let media = MediaLibrary::preload(&content, &cc.egui_ctx);

        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        if content
            .media()
            .iter()
            .all(|media| Assets::get(&media.path).is_none())
        {
            toasts.add(Toast {
                kind: ToastKind::Info,
                text: "No media assets found.\nRun `cargo run --bin fetch_media` to download them."
                    .into(),
                options: ToastOptions::default()
                    .duration_in_seconds(10.0)
                    .show_icon(true),
                ..Default::default()
            });
        }

        let content_watcher = args
            .watch_content
            .then(|| ContentWatcher::new(cc.egui_ctx.clone()))
            .flatten();

        Ok(Self {
            diagram: DiagramView::new(&content.floor_plan, args.reduced_motion),
            hero: HeroSection::new(args.reduced_motion),
            stats: StatsSection::new(args.reduced_motion),
            carousel: ProjectsCarousel::new(args.reduced_motion),
            statics: StaticSections::new(),
            nav: NavState::new(),
            media,
            content,
            toasts,
            content_watcher,
            reduced_motion: args.reduced_motion,
            scroll_offset: 0.0,
            scroll_progress: 0.0,
        })
    }

    /// Applies a reloaded content document: queues decodes for any new
    /// media and rebuilds the diagram over the new floor plan.
    fn apply_content(&mut self, ctx: &egui::Context, content: SiteContent) {
        self.media.queue_missing(&content, ctx);
        self.diagram = DiagramView::new(&content.floor_plan, self.reduced_motion);
        self.content = content;
        self.toasts.add(Toast {
            kind: ToastKind::Info,
            text: "Content reloaded".into(),
            options: ToastOptions::default()
                .duration_in_seconds(3.0)
                .show_icon(true),
            ..Default::default()
        });
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(content) = self.content_watcher.as_mut().and_then(|w| w.poll()) {
            self.apply_content(ctx, content);
        }
        self.media.poll(ctx);

        self.nav.update_scroll(self.scroll_offset);
        self.nav.show(ctx, &self.content, self.scroll_progress);
        self.show_page(ctx);

        self.toasts.show(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "South Side Studios",
        options,
        Box::new(move |cc| {
            let app = ShowcaseApp::new(cc, &args)?;
            Ok(Box::new(app))
        }),
    )
}
