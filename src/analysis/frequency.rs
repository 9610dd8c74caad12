// ============================================================================
// Analyse de fréquence
// ============================================================================
// Compte les occurrences de chaque numéro sur la fenêtre d'analyse et
// produit les classements chauds/froids et les répartitions du tapis
//
// CONCEPTS RUST :
// 1. Tableau [u32; 37] comme table de comptage : pas de HashMap nécessaire
// 2. Tri stable : sort_by_key préserve l'ordre d'insertion en cas d'égalité
// 3. Iterators : fold/filter/map plutôt que boucles indexées
// ============================================================================

use crate::models::{color_of, NumberColor, NumberProperties};

/// Table de fréquence des numéros sur une fenêtre de résultats
///
/// CONCEPT RUST : Construction par itérateur
/// - from_numbers accepte tout IntoIterator<Item = u8>
/// - La table mémorise aussi l'ordre de première apparition pour
///   départager les égalités de façon déterministe
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    /// Occurrences par numéro (index = numéro)
    counts: [u32; 37],

    /// Numéros dans leur ordre de première apparition dans la fenêtre
    first_seen: Vec<u8>,

    /// Nombre total de résultats comptés
    total: usize,
}

impl FrequencyTable {
    /// Construit la table à partir des numéros de la fenêtre
    ///
    /// Les numéros hors plage (> 36) sont ignorés : ils ne peuvent venir
    /// que d'un flux distant déjà filtré, on ne panique pas pour autant.
    pub fn from_numbers<I>(numbers: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let mut counts = [0u32; 37];
        let mut first_seen = Vec::new();
        let mut total = 0;

        for n in numbers {
            if n > 36 {
                continue;
            }
            if counts[n as usize] == 0 {
                first_seen.push(n);
            }
            counts[n as usize] += 1;
            total += 1;
        }

        Self {
            counts,
            first_seen,
            total,
        }
    }

    /// Occurrences d'un numéro (0 pour un numéro jamais sorti ou hors plage)
    pub fn count(&self, number: u8) -> u32 {
        if number > 36 {
            return 0;
        }
        self.counts[number as usize]
    }

    /// Nombre total de résultats comptés
    pub fn total(&self) -> usize {
        self.total
    }

    /// Classement des numéros sortis, du plus fréquent au moins fréquent
    ///
    /// CONCEPT RUST : Tri stable
    /// - sort_by_key est stable : à fréquence égale, l'ordre de première
    ///   apparition dans la fenêtre est préservé
    /// - C'est le contrat de départage des égalités de l'application
    pub fn ranked(&self) -> Vec<(u8, u32)> {
        let mut ranked: Vec<(u8, u32)> = self
            .first_seen
            .iter()
            .map(|&n| (n, self.counts[n as usize]))
            .collect();

        // Tri décroissant par fréquence ; Reverse évite un sort_by verbeux
        ranked.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
        ranked
    }

    /// Les k numéros les plus fréquents de la fenêtre (numéros "chauds")
    pub fn hot(&self, k: usize) -> Vec<u8> {
        self.ranked().into_iter().take(k).map(|(n, _)| n).collect()
    }

    /// Les k numéros les moins sortis (numéros "froids")
    ///
    /// Contrairement à hot(), on considère les 37 numéros du cylindre :
    /// un numéro jamais sorti compte 0 et sort en tête. Égalités
    /// départagées par numéro croissant.
    pub fn cold(&self, k: usize) -> Vec<u8> {
        let mut all: Vec<(u8, u32)> = (0..=36u8).map(|n| (n, self.counts[n as usize])).collect();
        all.sort_by_key(|&(_, count)| count);
        all.into_iter().take(k).map(|(n, _)| n).collect()
    }

    /// Répartition par couleur : (rouges, noirs, verts)
    pub fn color_counts(&self) -> (u32, u32, u32) {
        let mut reds = 0;
        let mut blacks = 0;
        let mut greens = 0;

        for n in 0..=36u8 {
            let c = self.counts[n as usize];
            match color_of(n) {
                NumberColor::Red => reds += c,
                NumberColor::Black => blacks += c,
                NumberColor::Green => greens += c,
            }
        }

        (reds, blacks, greens)
    }

    /// Répartition par douzaine : [1-12, 13-24, 25-36] (le zéro est exclu)
    pub fn dozen_counts(&self) -> [u32; 3] {
        self.group_counts(|props| props.dozen)
    }

    /// Répartition par colonne : [col 1, col 2, col 3] (le zéro est exclu)
    pub fn column_counts(&self) -> [u32; 3] {
        self.group_counts(|props| props.column)
    }

    /// Factorisation des répartitions en trois groupes du tapis
    fn group_counts<F>(&self, group: F) -> [u32; 3]
    where
        F: Fn(NumberProperties) -> Option<u8>,
    {
        let mut buckets = [0u32; 3];
        for n in 1..=36u8 {
            if let Some(g) = group(NumberProperties::of(n)) {
                buckets[(g - 1) as usize] += self.counts[n as usize];
            }
        }
        buckets
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let table = FrequencyTable::from_numbers([17, 3, 17, 0, 17, 3]);

        assert_eq!(table.count(17), 3);
        assert_eq!(table.count(3), 2);
        assert_eq!(table.count(0), 1);
        assert_eq!(table.count(36), 0);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let table = FrequencyTable::from_numbers([17, 99, 17]);
        assert_eq!(table.count(17), 2);
        assert_eq!(table.total(), 2);
    }

    #[test]
    fn test_ranked_orders_by_frequency() {
        let table = FrequencyTable::from_numbers([5, 12, 12, 7, 12, 7]);
        let ranked = table.ranked();

        assert_eq!(ranked[0], (12, 3));
        assert_eq!(ranked[1], (7, 2));
        assert_eq!(ranked[2], (5, 1));
    }

    #[test]
    fn test_ranked_ties_break_by_first_seen() {
        // 9 et 22 sortent deux fois chacun : 9 est apparu en premier,
        // il doit rester devant (tri stable sur l'ordre d'apparition)
        let table = FrequencyTable::from_numbers([9, 22, 22, 9, 31]);
        let ranked = table.ranked();

        assert_eq!(ranked[0].0, 9);
        assert_eq!(ranked[1].0, 22);
        assert_eq!(ranked[2].0, 31);
    }

    #[test]
    fn test_ranked_idempotent() {
        // Même fenêtre → même classement, à chaque appel
        let numbers = [4, 8, 15, 16, 23, 42, 4, 15, 4];
        let table = FrequencyTable::from_numbers(numbers);

        assert_eq!(table.ranked(), table.ranked());
        assert_eq!(
            table.ranked(),
            FrequencyTable::from_numbers(numbers).ranked()
        );
    }

    #[test]
    fn test_hot() {
        let table = FrequencyTable::from_numbers([1, 2, 2, 3, 3, 3]);
        assert_eq!(table.hot(2), vec![3, 2]);

        // k plus grand que le nombre de numéros distincts : on retourne tout
        assert_eq!(table.hot(10), vec![3, 2, 1]);
    }

    #[test]
    fn test_cold_includes_absent_numbers() {
        // Presque tout est absent : les froids sont les plus petits numéros
        // jamais sortis
        let table = FrequencyTable::from_numbers([0, 1, 2]);
        assert_eq!(table.cold(3), vec![3, 4, 5]);
    }

    #[test]
    fn test_color_counts() {
        // 32 rouge, 17 noir, 0 vert
        let table = FrequencyTable::from_numbers([32, 32, 17, 0]);
        assert_eq!(table.color_counts(), (2, 1, 1));
    }

    #[test]
    fn test_dozen_and_column_counts() {
        // 6 → douzaine 1 / colonne 3 ; 14 → douzaine 2 / colonne 2 ;
        // 25 → douzaine 3 / colonne 1 ; 0 exclu des deux répartitions
        let table = FrequencyTable::from_numbers([6, 14, 25, 0]);
        assert_eq!(table.dozen_counts(), [1, 1, 1]);
        assert_eq!(table.column_counts(), [1, 1, 1]);
    }
}
