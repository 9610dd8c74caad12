// ============================================================================
// Persistance de la session
// ============================================================================
// Sauvegarde et recharge l'historique des tirages entre deux lancements
// (l'équivalent TUI du localStorage de la version web)
//
// CONCEPTS RUST :
// 1. PathBuf : chemins de fichiers owned, cross-platform
// 2. serde_json : sérialisation de la Session complète en un fichier
// 3. Gestion gracieuse : fichier absent ou corrompu → session vide
// ============================================================================

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::models::Session;

/// Retourne le chemin du fichier de session
///
/// - Linux/WSL : ~/.local/share/lazyroulette/session.json
/// - macOS : ~/Library/Application Support/lazyroulette/session.json
/// - Windows : C:\Users\<user>\AppData\Roaming\lazyroulette\session.json
///
/// CONCEPT RUST : Fallback avec unwrap_or_else
/// - Si le répertoire data est introuvable (environnement exotique),
///   on retombe sur le répertoire courant
fn session_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lazyroulette")
        .join("session.json")
}

/// Charge la session depuis le disque
///
/// Fichier absent → session vide (premier lancement, pas une erreur).
/// Fichier corrompu → warning et session vide plutôt que crash au
/// démarrage.
pub fn load_session() -> Session {
    let path = session_path();

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => {
            debug!(?path, "No session file, starting empty");
            return Session::new();
        }
    };

    match serde_json::from_str::<Session>(&contents) {
        Ok(session) => {
            info!(?path, results = session.len(), "Session loaded");
            session
        }
        Err(e) => {
            warn!(?path, error = ?e, "Corrupt session file, starting empty");
            Session::new()
        }
    }
}

/// Sauvegarde la session sur le disque
///
/// CONCEPT RUST : Error propagation avec ?
/// - Chaque étape (création du répertoire, sérialisation, écriture)
///   peut échouer ; .context() ajoute le détail qui manque à l'erreur I/O
pub fn save_session(session: &Session) -> Result<()> {
    let path = session_path();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .context("Échec de la création du répertoire de session")?;
    }

    let json = serde_json::to_string_pretty(session)
        .context("Échec de la sérialisation de la session")?;

    fs::write(&path, json).context("Échec de l'écriture du fichier de session")?;

    info!(?path, results = session.len(), "Session saved");
    Ok(())
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;

    #[test]
    fn test_session_path_ends_with_file_name() {
        let path = session_path();
        assert!(path.ends_with("lazyroulette/session.json"));
    }

    #[test]
    fn test_corrupt_json_yields_empty_session() {
        // On ne touche pas au vrai fichier : on vérifie juste que le parsing
        // d'un JSON invalide est bien non-fatal côté serde
        let result: Result<Session, _> = serde_json::from_str("{not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_session_serializes_to_pretty_json() {
        let mut session = Session::new();
        session.record(17, Source::Manual);

        let json = serde_json::to_string_pretty(&session).unwrap();
        assert!(json.contains("\"number\": 17"));

        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.len(), 1);
    }
}
