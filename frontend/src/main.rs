use wolfs_eye::config::AppConfig;
use wolfs_eye::App;

fn main() {
    let (config, error) = AppConfig::from_build();
    wasm_logger::init(wasm_logger::Config::new(config.mode.log_level()));

    if let Some(e) = error {
        log::warn!("{}, using {}", e, config.mode);
    }

    if config.api_url.is_empty() {
        log::info!("Starting in {} mode, API base is same-origin", config.mode);
    } else {
        log::info!("Starting in {} mode, API base {}", config.mode, config.api_url);
    }

    yew::Renderer::<App>::new().render();
}
