#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod core;
mod global_constants;
mod ports;
mod presentation;
mod user_settings;
mod utils;

#[cfg(test)]
mod end_to_end_tests;

use std::sync::Arc;

use crate::adapters::OpenAiVisionAnalyzer;
use crate::core::interfaces::ports::PointerPositionProvider;
use crate::core::orchestrators::{AppOrchestrator, CapturePipeline};
use crate::global_constants::{LOG_TAG_APP, STARTUP_BANNER};
use crate::ports::{
    GlobalKeyboardListener, SystemPointerPositionProvider, XcapDisplayResolver, XcapFrameGrabber,
};

#[tokio::main]
async fn main() {
    env_logger::init();

    log::info!("{} Starting ScreenSage", LOG_TAG_APP);

    if !utils::ensure_single_instance() {
        log::error!("{} Failed to ensure single instance", LOG_TAG_APP);
    }

    let settings = user_settings::UserSettings::load().unwrap_or_else(|e| {
        log::warn!(
            "{} Failed to load settings: {}, using defaults",
            LOG_TAG_APP,
            e
        );
        user_settings::UserSettings::default()
    });

    let api_key = settings.resolved_api_key();
    if api_key.is_empty() {
        log::warn!(
            "{} No OpenAI API key configured - captures will fail at the analysis step",
            LOG_TAG_APP
        );
        eprintln!("[WARN] No OpenAI API key found. Set OPENAI_API_KEY or add it to the settings file.");
    }

    let pointer_provider: Arc<dyn PointerPositionProvider> =
        Arc::new(SystemPointerPositionProvider::initialize());
    let display_resolver = Arc::new(XcapDisplayResolver::initialize(Arc::clone(
        &pointer_provider,
    )));
    let frame_grabber = Arc::new(XcapFrameGrabber::initialize());

    let pipeline = Arc::new(CapturePipeline::build(display_resolver, frame_grabber));

    let vision_analyzer = Arc::new(OpenAiVisionAnalyzer::build(
        api_key,
        settings.model_name.clone(),
        settings.max_response_tokens,
    ));

    let mut orchestrator = AppOrchestrator::build(
        pipeline,
        pointer_provider,
        vision_analyzer,
        settings.default_mode,
        settings.copy_answer_to_clipboard,
    );

    println!("{}", STARTUP_BANNER);

    let mut keyboard_events = GlobalKeyboardListener::start_event_stream();

    log::info!("{} Ready - waiting for hotkey events", LOG_TAG_APP);

    while let Some(event) = keyboard_events.recv().await {
        orchestrator.handle_keyboard_event(event);
    }

    log::info!("{} Keyboard event stream closed, exiting", LOG_TAG_APP);
}
