use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::store::{Store, log::dlog};
use crate::ui::messages::success;
use std::process::Command;

/// Handle the `config` subcommand.
pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        set,
        edit_config,
        editor,
    } = cmd
    {
        // ---- SET KEYS ----
        if !set.is_empty() {
            let mut settings = store.load_settings()?;

            for pair in set {
                let (key, value) = pair.split_once('=').ok_or_else(|| {
                    AppError::Config(format!("expected KEY=VALUE, got '{pair}'"))
                })?;
                settings.set_key(key.trim(), value.trim())?;
            }

            store.save_settings(&settings)?;
            let _ = dlog(store, "config", "", &format!("Updated {} key(s)", set.len()));
            success(format!("Updated {} setting(s)", set.len()));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            let settings = store.load_settings()?;
            println!("📄 Current settings:\n");
            println!(
                "{}",
                serde_yaml::to_string(&settings).map_err(|e| AppError::Config(e.to_string()))?
            );
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let path = store.settings_file();
            let requested_editor = editor.clone();

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

            let status = Command::new(&editor_to_use).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    success(format!(
                        "Settings file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    eprintln!(
                        "⚠️  Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    );

                    let fallback_status = Command::new(&default_editor).arg(&path).status();
                    match fallback_status {
                        Ok(s) if s.success() => {
                            success(format!(
                                "Settings file edited successfully using fallback '{}'",
                                default_editor
                            ));
                        }
                        Ok(_) | Err(_) => {
                            return Err(AppError::Config(format!(
                                "failed to edit settings file using fallback '{}'",
                                default_editor
                            )));
                        }
                    }
                }
            }

            // surface a parse failure right away rather than on next use
            store.load_settings()?;
        }
    }

    Ok(())
}
