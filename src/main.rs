use emotion_quest::EmotionApp;
use emotion_quest::progress::{PROGRESS_KEY, Progress};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Emotion Quest",
        options,
        Box::new(|cc| {
            let saved = cc
                .storage
                .and_then(|storage| eframe::get_value::<Progress>(storage, PROGRESS_KEY));
            Ok(Box::new(EmotionApp::new(saved)))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("emotion_quest_canvas")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas 'emotion_quest_canvas' not found");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| {
                    let saved = cc
                        .storage
                        .and_then(|storage| eframe::get_value::<Progress>(storage, PROGRESS_KEY));
                    Ok(Box::new(EmotionApp::new(saved)))
                }),
            )
            .await;
        if let Err(err) = result {
            log::error!("Failed to start eframe: {err:?}");
        }
    });
}
