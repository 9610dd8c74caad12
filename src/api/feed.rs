// ============================================================================
// API Client : flux de résultats distant
// ============================================================================
// Importe un historique de numéros depuis un flux JSON (le backend qui
// enregistrait les tirages côté web)
//
// CONCEPTS RUST AVANCÉS :
// 1. async/await : programmation asynchrone (non-bloquante)
// 2. Result<T, E> : gestion d'erreurs avec contexte
// 3. Serde : désérialisation JSON automatique
// ============================================================================

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};

// ============================================================================
// Structures pour parser la réponse JSON du flux
// ============================================================================
// Le flux retourne un tableau plat d'entrées :
// [{"number": 17}, {"number": 0}, ...]
// Les champs supplémentaires éventuels (id, horodatage serveur) sont ignorés
// par serde : on ne garde que le numéro
// ============================================================================

/// Une entrée du flux de résultats
#[derive(Debug, Deserialize)]
struct FeedEntry {
    number: u8,
}

// ============================================================================
// Fonctions publiques de l'API
// ============================================================================

/// Récupère les numéros d'un flux de résultats JSON
///
/// CONCEPT RUST : async fn
/// - Fonction asynchrone qui peut être "await"ée
/// - Ne bloque pas le thread pendant les I/O réseau
///
/// Les entrées hors plage (> 36) sont ignorées avec un warning plutôt que
/// de faire échouer tout l'import. Pas de retry : une erreur réseau remonte
/// telle quelle et sera affichée comme message d'état.
///
/// # Arguments
/// * `url` - URL du flux (ex: "https://example.com/api/results")
///
/// # Retourne
/// * `Result<Vec<u8>>` - Numéros valides dans l'ordre du flux, ou erreur
///
/// CONCEPT RUST : #[instrument]
/// - Macro tracing qui ajoute automatiquement un span
/// - Tous les logs à l'intérieur auront le contexte url
#[instrument]
pub async fn fetch_feed(url: &str) -> Result<Vec<u8>> {
    debug!("Creating HTTP client");
    let client = reqwest::Client::builder()
        .user_agent("lazyroulette/0.1")
        .build()
        .context("Échec de la création du client HTTP")?;

    debug!("Sending HTTP request to results feed");
    let response = client
        .get(url)
        .send()
        .await
        .context("Échec de la requête HTTP vers le flux de résultats")?;

    let status = response.status();
    debug!(status = %status, "Received HTTP response");

    // Vérifie que la réponse est un succès HTTP (200-299)
    if !status.is_success() {
        error!(status = %status, "Results feed returned error status");
        anyhow::bail!("Le flux de résultats a retourné une erreur : HTTP {}", status);
    }

    // Parse la réponse JSON
    // CONCEPT RUST : Serde deserialization
    // - .json::<T>() désérialise automatiquement le JSON vers le type T
    debug!("Parsing JSON response");
    let entries: Vec<FeedEntry> = response
        .json()
        .await
        .context("Échec du parsing JSON du flux de résultats")?;

    let numbers = validate_entries(entries);

    if numbers.is_empty() {
        error!("No valid numbers found in feed");
        anyhow::bail!("Aucun numéro valide dans le flux de résultats");
    }

    info!(numbers = numbers.len(), "Successfully fetched results feed");
    Ok(numbers)
}

/// Filtre les entrées du flux et ne garde que les numéros 0-36
///
/// CONCEPT RUST : Ownership
/// - entries est "moved" (pas de &), on consomme le Vec
/// - Les entrées invalides sont comptées et loggées, pas fatales
fn validate_entries(entries: Vec<FeedEntry>) -> Vec<u8> {
    let total = entries.len();
    let mut skipped = 0;

    let numbers: Vec<u8> = entries
        .into_iter()
        .filter_map(|entry| {
            if entry.number <= 36 {
                Some(entry.number)
            } else {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        warn!(skipped, total, "Skipped out-of-range feed entries");
    }

    debug!(parsed = numbers.len(), total, skipped, "Finished parsing feed");
    numbers
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_entries_keeps_valid_numbers() {
        let entries = vec![
            FeedEntry { number: 0 },
            FeedEntry { number: 17 },
            FeedEntry { number: 36 },
        ];

        assert_eq!(validate_entries(entries), vec![0, 17, 36]);
    }

    #[test]
    fn test_validate_entries_skips_out_of_range() {
        let entries = vec![
            FeedEntry { number: 17 },
            FeedEntry { number: 37 },
            FeedEntry { number: 200 },
            FeedEntry { number: 4 },
        ];

        // Les hors plage sont ignorés, l'ordre du flux est préservé
        assert_eq!(validate_entries(entries), vec![17, 4]);
    }

    #[test]
    fn test_feed_entry_deserialization() {
        // Les champs serveur supplémentaires sont ignorés par serde
        let json = r#"[{"number": 12, "id": 99, "recorded_at": "2026-01-01"}]"#;
        let entries: Vec<FeedEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].number, 12);
    }

    // Test async nécessite tokio test runtime
    // CONCEPT RUST : #[tokio::test]
    // - Macro qui setup un runtime tokio pour le test
    // - Permet d'utiliser .await dans les tests
    #[tokio::test]
    async fn test_fetch_feed_bad_url() {
        // Une URL injoignable doit remonter une erreur, pas paniquer
        let result = fetch_feed("http://127.0.0.1:9/results").await;
        assert!(result.is_err());
    }
}
