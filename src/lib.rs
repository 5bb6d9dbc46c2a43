use std::sync::Mutex;

use tauri::{Emitter, Manager};

mod commands;
mod import;
mod storage;
mod vocabulary;

use storage::StateStore;
use vocabulary::WordService;

pub struct AppState {
    pub words: Mutex<WordService>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let data_dir = StateStore::default_data_dir().expect("Failed to get data directory");
    let store = StateStore::new(data_dir);
    store.init().expect("Failed to initialize storage");

    let state = AppState {
        words: Mutex::new(WordService::load(store)),
    };

    let app = tauri::Builder::default()
        .manage(state)
        .plugin(tauri_plugin_fs::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            // Forward the service's change channels to the webview as
            // Tauri events so components can react without polling.
            let state: tauri::State<AppState> = app.handle().state();
            let words = state.words.lock().unwrap();

            let handle = app.handle().clone();
            words.vocabulary_changed().subscribe(move |vocabulary| {
                let _ = handle.emit("vocabulary-changed", vocabulary);
            });

            let handle = app.handle().clone();
            words.completed_count_changed().subscribe(move |count| {
                let _ = handle.emit("completed-count-changed", *count);
            });

            let handle = app.handle().clone();
            words.incorrect_attempts_changed().subscribe(move |attempts| {
                let _ = handle.emit("incorrect-attempts-changed", attempts);
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Vocabulary commands
            commands::vocabulary::add_vocabulary,
            commands::vocabulary::get_vocabulary,
            commands::vocabulary::get_progress,
            commands::vocabulary::clear_vocabulary,
            // Quiz commands
            commands::quiz::generate_quiz_options,
            commands::quiz::mark_word_completed,
            commands::quiz::mark_word_incorrect,
            commands::quiz::get_incorrect_attempts,
            commands::quiz::get_all_incorrect_attempts,
            commands::quiz::get_incorrect_words_report,
            // Import commands
            commands::import::import_csv,
            commands::import::import_json,
            commands::import::import_pdf,
            // Shell file bridge
            commands::shell::stage_temp_file,
            commands::shell::remove_temp_file,
            commands::shell::join_path,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        if let tauri::RunEvent::Exit = event {
            // Final flush before teardown.
            let state: tauri::State<AppState> = app_handle.state();
            if let Ok(words) = state.words.lock() {
                words.flush();
            };
        }
    });
}
