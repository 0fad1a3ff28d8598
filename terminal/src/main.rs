//! Currency swap terminal binary.

use std::sync::Arc;

use swap_terminal::core::config::SwapConfig;
use swap_terminal::services::prices::PriceClient;
use swap_terminal::ui::theme::Theme;
use swap_terminal::ui::widgets::icons::initialize_material_icons;
use swap_terminal::ui::widgets::notifications::NotificationManager;
use swap_terminal::utils::runtime::TOKIO_RT;
use swap_terminal::{debug, App};

const APP_TITLE: &str = "Currency Swap";

struct SwapTerminal {
    app: App,
    notifications: NotificationManager,
}

impl eframe::App for SwapTerminal {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        swap_terminal::ui::render(ctx, &mut self.app, &mut self.notifications);

        // Timers and the fetch finish off-frame; poll for their events
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    debug::init();

    let config = SwapConfig::from_env()?;
    config.validate()?;

    // Spawned tasks need a runtime context on the UI thread
    let _enter = TOKIO_RT.enter();

    let feed = Arc::new(PriceClient::new(&config)?);
    let app = App::new(config, feed);
    app.load_prices();

    tracing::info!("Starting {}", APP_TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            initialize_material_icons(&cc.egui_ctx);
            Theme::apply(&cc.egui_ctx);
            Ok(Box::new(SwapTerminal {
                app,
                notifications: NotificationManager::new(),
            }))
        }),
    )?;

    Ok(())
}
