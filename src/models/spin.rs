// ============================================================================
// Structures : SpinResult et Session
// ============================================================================
// Un résultat de roulette enregistré et l'historique ordonné de la session
//
// CONCEPTS RUST :
// 1. DateTime<Utc> : type de chrono pour horodater chaque résultat
// 2. Append-only : un résultat est immuable une fois enregistré
// 3. Slices : window() emprunte les n derniers résultats sans copie
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provenance d'un résultat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    /// Saisi au clavier dans le dashboard
    Manual,
    /// Importé depuis un flux JSON distant
    Import,
}

impl Source {
    /// Retourne le label pour l'affichage
    pub fn label(&self) -> &'static str {
        match self {
            Source::Manual => "manuel",
            Source::Import => "import",
        }
    }
}

/// Un résultat de roulette enregistré
///
/// Immuable une fois créé : on n'a que des lectures, jamais de &mut
/// sur un SpinResult existant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinResult {
    /// Identifiant croissant au sein de la session
    pub id: u64,

    /// Numéro sorti (0-36)
    pub number: u8,

    /// Horodatage de l'enregistrement
    pub timestamp: DateTime<Utc>,

    /// Provenance (saisie manuelle ou import)
    pub source: Source,
}

/// Fenêtre d'analyse : combien de résultats récents alimenter l'analyse
///
/// CONCEPT : Cycle d'états (comme un sélecteur d'intervalle)
/// - W10 → W20 → W30 → W50 → All → W10
/// - Modifiable avec les touches h / l
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Window {
    /// 10 derniers résultats
    W10,
    /// 20 derniers résultats
    W20,
    /// 30 derniers résultats
    W30,
    /// 50 derniers résultats
    W50,
    /// Toute la session
    All,
}

impl Window {
    /// Taille de la fenêtre, None pour toute la session
    pub fn size(&self) -> Option<usize> {
        match self {
            Window::W10 => Some(10),
            Window::W20 => Some(20),
            Window::W30 => Some(30),
            Window::W50 => Some(50),
            Window::All => None,
        }
    }

    /// Retourne le label court pour l'affichage
    pub fn label(&self) -> &'static str {
        match self {
            Window::W10 => "10",
            Window::W20 => "20",
            Window::W30 => "30",
            Window::W50 => "50",
            Window::All => "tout",
        }
    }

    /// Fenêtre suivante (cycle)
    pub fn next(&self) -> Window {
        match self {
            Window::W10 => Window::W20,
            Window::W20 => Window::W30,
            Window::W30 => Window::W50,
            Window::W50 => Window::All,
            Window::All => Window::W10, // Boucle
        }
    }

    /// Fenêtre précédente (cycle)
    pub fn previous(&self) -> Window {
        match self {
            Window::W10 => Window::All, // Boucle
            Window::W20 => Window::W10,
            Window::W30 => Window::W20,
            Window::W50 => Window::W30,
            Window::All => Window::W50,
        }
    }
}

impl Default for Window {
    /// Fenêtre par défaut : 20 résultats (bon équilibre réactivité/bruit)
    fn default() -> Self {
        Window::W20
    }
}

/// Historique ordonné des résultats de la session
///
/// CONCEPT RUST : Ownership
/// - Session possède le Vec, le Vec possède les SpinResult
/// - Append-only : record() pousse en fin, seul undo_last() retire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// Résultats dans l'ordre d'enregistrement (le plus récent en dernier)
    results: Vec<SpinResult>,

    /// Prochain identifiant à attribuer
    next_id: u64,
}

impl Session {
    /// Crée une session vide
    pub fn new() -> Self {
        Self::default()
    }

    /// Enregistre un nouveau résultat et retourne son identifiant
    ///
    /// Le numéro est supposé valide (0-36) : la validation de plage se fait
    /// à la saisie et à l'import, pas ici.
    pub fn record(&mut self, number: u8, source: Source) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.results.push(SpinResult {
            id,
            number,
            timestamp: Utc::now(),
            source,
        });
        id
    }

    /// Retire le dernier résultat enregistré (correction de saisie)
    pub fn undo_last(&mut self) -> Option<SpinResult> {
        self.results.pop()
    }

    /// Retourne le nombre de résultats enregistrés
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Vérifie si la session est vide
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Retourne le résultat le plus récent
    pub fn last(&self) -> Option<&SpinResult> {
        self.results.last()
    }

    /// Retourne tous les résultats dans l'ordre chronologique
    pub fn results(&self) -> &[SpinResult] {
        &self.results
    }

    /// Retourne les résultats de la fenêtre d'analyse, ordre chronologique
    ///
    /// CONCEPT RUST : Slices
    /// - Emprunte les n derniers éléments sans copier
    /// - Window::All (None) → toute la session
    pub fn window(&self, window: Window) -> &[SpinResult] {
        match window.size() {
            Some(n) => {
                let start = self.results.len().saturating_sub(n);
                &self.results[start..]
            }
            None => &self.results,
        }
    }

    /// Numéros de la fenêtre d'analyse, ordre chronologique
    pub fn window_numbers(&self, window: Window) -> Vec<u8> {
        self.window(window).iter().map(|r| r.number).collect()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_assigns_increasing_ids() {
        let mut session = Session::new();
        let a = session.record(17, Source::Manual);
        let b = session.record(0, Source::Manual);

        assert!(b > a);
        assert_eq!(session.len(), 2);
        assert_eq!(session.last().unwrap().number, 0);
    }

    #[test]
    fn test_undo_last() {
        let mut session = Session::new();
        session.record(5, Source::Manual);
        session.record(12, Source::Import);

        let removed = session.undo_last().unwrap();
        assert_eq!(removed.number, 12);
        assert_eq!(removed.source, Source::Import);
        assert_eq!(session.len(), 1);

        session.undo_last();
        assert!(session.undo_last().is_none());
    }

    #[test]
    fn test_ids_not_reused_after_undo() {
        // undo_last ne réattribue pas l'identifiant retiré
        let mut session = Session::new();
        session.record(1, Source::Manual);
        let b = session.record(2, Source::Manual);
        session.undo_last();
        let c = session.record(3, Source::Manual);

        assert!(c > b);
    }

    #[test]
    fn test_window_returns_most_recent() {
        let mut session = Session::new();
        for n in 0..30u8 {
            session.record(n, Source::Manual);
        }

        let window = session.window(Window::W10);
        assert_eq!(window.len(), 10);
        assert_eq!(window.first().unwrap().number, 20);
        assert_eq!(window.last().unwrap().number, 29);
    }

    #[test]
    fn test_window_smaller_session() {
        // Fenêtre plus grande que la session : on retourne tout
        let mut session = Session::new();
        session.record(7, Source::Manual);
        session.record(9, Source::Manual);

        assert_eq!(session.window(Window::W20).len(), 2);
        assert_eq!(session.window(Window::All).len(), 2);
    }

    #[test]
    fn test_window_cycle() {
        assert_eq!(Window::W10.next(), Window::W20);
        assert_eq!(Window::W10.previous(), Window::All);
        assert_eq!(Window::All.next(), Window::W10); // Boucle
        assert_eq!(Window::default(), Window::W20);
    }

    #[test]
    fn test_session_roundtrip_json() {
        // La session doit survivre à la sérialisation (persistance disque)
        let mut session = Session::new();
        session.record(17, Source::Manual);
        session.record(34, Source::Import);

        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 2);
        assert_eq!(restored.last().unwrap().number, 34);

        // Les identifiants continuent après rechargement
        let mut restored = restored;
        let id = restored.record(5, Source::Manual);
        assert_eq!(id, 2);
    }
}
