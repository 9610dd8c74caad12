// ============================================================================
// Classification des numéros de roulette
// ============================================================================
// Propriétés statiques des 37 numéros de la roulette européenne (0-36)
//
// CONCEPTS RUST :
// 1. Constantes : tables fixes compilées dans le binaire (pas d'allocation)
// 2. Enums : Red/Black/Green au lieu de strings magiques
// 3. Option<T> : le zéro n'a ni douzaine, ni colonne, ni moitié, ni parité
// ============================================================================

use serde::{Deserialize, Serialize};

/// Les 18 numéros rouges de la roulette européenne
///
/// CONCEPT RUST : const vs static
/// - const : inliné à chaque utilisation, pas d'adresse fixe
/// - Les 18 noirs sont le complément dans 1..=36, le 0 est vert
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Couleur d'un numéro sur le tapis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberColor {
    /// Numéro rouge (18 numéros)
    Red,
    /// Numéro noir (18 numéros)
    Black,
    /// Le zéro (case verte)
    Green,
}

impl NumberColor {
    /// Retourne le label pour l'affichage
    pub fn label(&self) -> &'static str {
        match self {
            NumberColor::Red => "Rouge",
            NumberColor::Black => "Noir",
            NumberColor::Green => "Vert",
        }
    }
}

/// Moitié du tapis (manque / passe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Half {
    /// Manque : 1-18
    Low,
    /// Passe : 19-36
    High,
}

/// Parité d'un numéro (le zéro n'est ni pair ni impair au tapis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    Even,
    Odd,
}

/// Retourne la couleur d'un numéro (0-36)
///
/// CONCEPT RUST : Fonction totale
/// - Pas de Result : tout numéro 0-36 a exactement une couleur
/// - La validation de plage se fait à la saisie, pas ici
pub fn color_of(number: u8) -> NumberColor {
    if number == 0 {
        NumberColor::Green
    } else if RED_NUMBERS.contains(&number) {
        NumberColor::Red
    } else {
        NumberColor::Black
    }
}

/// Propriétés complètes d'un numéro : couleur, douzaine, colonne, moitié, parité
///
/// CONCEPT RUST : Option pour le cas zéro
/// - Some(..) pour 1-36, None pour 0 (le zéro n'appartient à aucun
///   groupement extérieur du tapis)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberProperties {
    /// Couleur du numéro
    pub color: NumberColor,

    /// Douzaine (1-3), None pour le zéro
    pub dozen: Option<u8>,

    /// Colonne (1-3), None pour le zéro
    pub column: Option<u8>,

    /// Manque/Passe, None pour le zéro
    pub half: Option<Half>,

    /// Pair/Impair, None pour le zéro
    pub parity: Option<Parity>,
}

impl NumberProperties {
    /// Calcule les propriétés d'un numéro (0-36)
    ///
    /// Douzaine : 1-12 → 1, 13-24 → 2, 25-36 → 3
    /// Colonne : n % 3 == 1 → 1, n % 3 == 2 → 2, n % 3 == 0 → 3
    pub fn of(number: u8) -> Self {
        if number == 0 {
            return Self {
                color: NumberColor::Green,
                dozen: None,
                column: None,
                half: None,
                parity: None,
            };
        }

        let dozen = match number {
            1..=12 => 1,
            13..=24 => 2,
            _ => 3,
        };

        let column = match number % 3 {
            1 => 1,
            2 => 2,
            _ => 3,
        };

        let half = if number <= 18 { Half::Low } else { Half::High };

        let parity = if number % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        };

        Self {
            color: color_of(number),
            dozen: Some(dozen),
            column: Some(column),
            half: Some(half),
            parity: Some(parity),
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_of_known_numbers() {
        assert_eq!(color_of(0), NumberColor::Green);
        assert_eq!(color_of(17), NumberColor::Black);
        assert_eq!(color_of(32), NumberColor::Red);
        assert_eq!(color_of(36), NumberColor::Red);
    }

    #[test]
    fn test_colors_partition_the_layout() {
        // Rouge ∪ Noir ∪ {0} doit couvrir 0..=36 avec 18 rouges et 18 noirs
        let mut reds = 0;
        let mut blacks = 0;
        let mut greens = 0;

        for n in 0..=36u8 {
            match color_of(n) {
                NumberColor::Red => reds += 1,
                NumberColor::Black => blacks += 1,
                NumberColor::Green => greens += 1,
            }
        }

        assert_eq!(reds, 18);
        assert_eq!(blacks, 18);
        assert_eq!(greens, 1);
    }

    #[test]
    fn test_properties_of_zero() {
        let props = NumberProperties::of(0);
        assert_eq!(props.color, NumberColor::Green);
        assert!(props.dozen.is_none());
        assert!(props.column.is_none());
        assert!(props.half.is_none());
        assert!(props.parity.is_none());
    }

    #[test]
    fn test_properties_of_36() {
        let props = NumberProperties::of(36);
        assert_eq!(props.dozen, Some(3));
        assert_eq!(props.column, Some(3));
        assert_eq!(props.half, Some(Half::High));
        assert_eq!(props.parity, Some(Parity::Even));
    }

    #[test]
    fn test_properties_defined_for_all_non_zero() {
        // Toutes les propriétés sont Some pour 1-36, dans les plages annoncées
        for n in 1..=36u8 {
            let props = NumberProperties::of(n);
            assert!(matches!(props.dozen, Some(1..=3)), "douzaine pour {}", n);
            assert!(matches!(props.column, Some(1..=3)), "colonne pour {}", n);
            assert!(props.half.is_some(), "moitié pour {}", n);
            assert!(props.parity.is_some(), "parité pour {}", n);
        }
    }

    #[test]
    fn test_column_arithmetic() {
        // Colonne 1 : 1, 4, 7, ... ; colonne 3 : 3, 6, ..., 36
        assert_eq!(NumberProperties::of(1).column, Some(1));
        assert_eq!(NumberProperties::of(2).column, Some(2));
        assert_eq!(NumberProperties::of(3).column, Some(3));
        assert_eq!(NumberProperties::of(34).column, Some(1));
    }
}
