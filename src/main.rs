use flashcard_quiz::FlashcardApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting Flashcard App");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Flashcard App")
            .with_inner_size([500.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Flashcard App",
        options,
        Box::new(|cc| Ok(Box::new(FlashcardApp::from_storage(cc.storage)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };
        let canvas = match document
            .get_element_by_id("the_canvas_id")
            .map(|el| el.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("Canvas 'the_canvas_id' not found");
                return;
            }
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(FlashcardApp::from_storage(cc.storage)))),
            )
            .await;
        if let Err(err) = start_result {
            log::error!("Failed to start eframe: {err:?}");
        }
    });
}
