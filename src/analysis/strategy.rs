// ============================================================================
// Générateur de suggestions de mise
// ============================================================================
// Transforme la table de fréquence de la fenêtre en ensembles de numéros
// à afficher : pleins ("straight-up") ou voisins du numéro dominant
//
// CONCEPTS RUST :
// 1. Enum + match : une stratégie = un variant, pas de dispatch dynamique
// 2. Option<Suggestion> : fenêtre vide → pas de suggestion
// 3. Déterminisme : même fenêtre → même suggestion (fonctions pures)
// ============================================================================

use crate::analysis::frequency::FrequencyTable;
use crate::models::wheel;

/// Nombre de pleins proposés par la stratégie StraightUp
pub const STRAIGHT_UP_COUNT: usize = 7;

/// Rayon de voisinage pour la stratégie Neighbors (5 numéros au total)
pub const NEIGHBORS_RADIUS: usize = 2;

/// Stratégie de suggestion affichée sur le dashboard
///
/// CONCEPT : Cycle d'états
/// - StraightUp → Neighbors → StraightUp
/// - Modifiable avec les flèches haut/bas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Les 7 numéros les plus fréquents de la fenêtre
    StraightUp,
    /// Le numéro dominant et ses voisins sur le cylindre
    Neighbors,
}

impl Strategy {
    /// Retourne le label pour l'affichage
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::StraightUp => "Pleins",
            Strategy::Neighbors => "Voisins",
        }
    }

    /// Stratégie suivante (cycle)
    pub fn next(&self) -> Strategy {
        match self {
            Strategy::StraightUp => Strategy::Neighbors,
            Strategy::Neighbors => Strategy::StraightUp, // Boucle
        }
    }

    /// Stratégie précédente (cycle à deux états : identique à next)
    pub fn previous(&self) -> Strategy {
        self.next()
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::StraightUp
    }
}

/// Une suggestion dérivée de la fenêtre courante
///
/// Donnée éphémère : recalculée à chaque rendu, jamais persistée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Stratégie qui a produit la suggestion
    pub strategy: Strategy,

    /// Numéros suggérés, dans l'ordre de la stratégie
    pub numbers: Vec<u8>,

    /// Nombre de résultats de la fenêtre utilisés pour le calcul
    pub basis: usize,
}

/// Calcule la suggestion pour une stratégie et une fenêtre de numéros
///
/// Retourne None si la fenêtre est vide : rien à suggérer tant qu'aucun
/// résultat n'est enregistré.
///
/// - StraightUp : les 7 numéros les plus fréquents (moins s'il y a moins
///   de numéros distincts), égalités départagées par ordre d'apparition
/// - Neighbors : le numéro le plus fréquent et ses voisins de rayon 2,
///   soit 5 numéros dans l'ordre du cylindre
pub fn suggest(strategy: Strategy, window_numbers: &[u8]) -> Option<Suggestion> {
    let table = FrequencyTable::from_numbers(window_numbers.iter().copied());
    if table.total() == 0 {
        return None;
    }

    let numbers = match strategy {
        Strategy::StraightUp => table.hot(STRAIGHT_UP_COUNT),
        Strategy::Neighbors => {
            let top = *table.hot(1).first()?;
            wheel::neighbors(top, NEIGHBORS_RADIUS)
        }
    };

    Some(Suggestion {
        strategy,
        numbers,
        basis: table.total(),
    })
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window_has_no_suggestion() {
        assert!(suggest(Strategy::StraightUp, &[]).is_none());
        assert!(suggest(Strategy::Neighbors, &[]).is_none());
    }

    #[test]
    fn test_straight_up_takes_top_seven() {
        // 8 numéros distincts, 12 est le plus fréquent
        let window = [12, 12, 12, 5, 5, 9, 9, 1, 2, 3, 4, 6];
        let suggestion = suggest(Strategy::StraightUp, &window).unwrap();

        assert_eq!(suggestion.strategy, Strategy::StraightUp);
        assert_eq!(suggestion.numbers.len(), 7);
        assert_eq!(suggestion.numbers[0], 12);
        assert_eq!(suggestion.basis, 12);
        // Le 8e numéro distinct (6, vu en dernier) ne fait pas partie du top 7
        assert!(!suggestion.numbers.contains(&6));
    }

    #[test]
    fn test_straight_up_fewer_distinct_numbers() {
        let suggestion = suggest(Strategy::StraightUp, &[4, 4, 31]).unwrap();
        assert_eq!(suggestion.numbers, vec![4, 31]);
        assert_eq!(suggestion.basis, 3);
    }

    #[test]
    fn test_neighbors_of_dominant_number() {
        // 17 domine la fenêtre : on propose ses voisins de rayon 2
        let window = [17, 17, 17, 5, 8];
        let suggestion = suggest(Strategy::Neighbors, &window).unwrap();

        assert_eq!(suggestion.strategy, Strategy::Neighbors);
        assert_eq!(suggestion.numbers, vec![2, 25, 17, 34, 6]);
    }

    #[test]
    fn test_neighbors_tie_uses_first_seen() {
        // 8 et 23 à égalité : 8 est apparu en premier, c'est lui le centre.
        // Sur le cylindre, 8 est entouré de 30 et 23.
        let window = [8, 23, 23, 8];
        let suggestion = suggest(Strategy::Neighbors, &window).unwrap();

        assert_eq!(suggestion.numbers[2], 8);
        assert_eq!(suggestion.numbers, vec![11, 30, 8, 23, 10]);
    }

    #[test]
    fn test_suggest_is_idempotent() {
        // Fenêtre inchangée → suggestion identique à chaque appel
        let window = [3, 26, 0, 3, 35, 3, 26];
        let a = suggest(Strategy::StraightUp, &window).unwrap();
        let b = suggest(Strategy::StraightUp, &window).unwrap();
        assert_eq!(a, b);

        let c = suggest(Strategy::Neighbors, &window).unwrap();
        let d = suggest(Strategy::Neighbors, &window).unwrap();
        assert_eq!(c, d);
    }

    #[test]
    fn test_strategy_cycle() {
        assert_eq!(Strategy::StraightUp.next(), Strategy::Neighbors);
        assert_eq!(Strategy::Neighbors.next(), Strategy::StraightUp); // Boucle
        assert_eq!(Strategy::default(), Strategy::StraightUp);
    }
}
