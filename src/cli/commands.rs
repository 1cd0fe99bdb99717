//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::Path;

/// Commands for Quadslator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text into a target language
    Translate {
        /// Text to translate
        text: String,

        /// Target language or dialect, e.g. "Spanish used in Mexico".
        /// Falls back to the stored preference when omitted.
        #[arg(short = 'a', long = "as", value_name = "LANG")]
        target: Option<String>,

        /// Print the translation without touching the store
        #[arg(long)]
        no_save: bool,
    },

    /// List past translations
    History {
        /// Maximum number of entries to show (newest first)
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

/// Handle the translate command
pub async fn handle_translate(
    text: String,
    target: Option<String>,
    no_save: bool,
    config_path: &Path,
    store_path: &Path,
) -> anyhow::Result<()> {
    use crate::core::client::TranslationClient;
    use crate::core::models::TranslationRecord;
    use crate::store::TranslationStore;
    use tracing::info;

    let client = TranslationClient::from_config_file(config_path);
    let mut store = TranslationStore::open(store_path)?;

    // An explicit target is treated like an edit of the preference
    // field: persisted up front, whether or not the call succeeds.
    let target_given = target.is_some();
    let target = match target.or_else(|| store.preference().map(|p| p.translate_as.clone())) {
        Some(target) => target,
        None => anyhow::bail!(
            "no target language given; pass --as or translate with one once to set a preference"
        ),
    };

    if target_given && !no_save {
        store.set_preference(target.as_str());
        store.save()?;
    }

    let translation = client.translate(&text, &target).await?;
    println!("{}", translation);

    if !no_save {
        store.append(TranslationRecord::new(text, translation));
        store.save()?;
        info!("saved translation ({} total)", store.len());
    }

    Ok(())
}

/// Handle the history command
pub async fn handle_history(limit: usize, store_path: &Path) -> anyhow::Result<()> {
    use crate::store::TranslationStore;

    let store = TranslationStore::open(store_path)?;

    if let Some(preference) = store.preference() {
        println!("Preferred target: {}", preference.translate_as);
    }

    if store.is_empty() {
        println!("No translations recorded yet.");
        return Ok(());
    }

    for record in store.recent(limit) {
        println!(
            "[{}] {} -> {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.source_text,
            record.translated_text
        );
    }

    Ok(())
}
