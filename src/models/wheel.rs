// ============================================================================
// Modèle du cylindre européen
// ============================================================================
// Ordre physique des 37 numéros sur le cylindre et calcul des voisins
//
// CONCEPTS RUST :
// 1. Tableau constant de taille fixe : [u8; 37] connu à la compilation
// 2. Arithmétique modulaire : le cylindre est circulaire (wraparound)
// 3. Iterator::position : recherche de l'index d'un numéro
// ============================================================================

/// Ordre des numéros sur le cylindre européen, sens horaire depuis le zéro
///
/// Table précalculée, jamais modifiée. L'ordre physique n'a aucun rapport
/// avec l'ordre du tapis : 32 et 15 encadrent des numéros très éloignés
/// numériquement.
pub const WHEEL_ORDER: [u8; 37] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5,
    24, 16, 33, 1, 20, 14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

/// Retourne la position d'un numéro sur le cylindre
///
/// CONCEPT RUST : Option<usize>
/// - Some(index) si le numéro est sur le cylindre (0-36)
/// - None sinon (numéro hors cylindre)
pub fn wheel_position(number: u8) -> Option<usize> {
    WHEEL_ORDER.iter().position(|&n| n == number)
}

/// Retourne les voisins physiques d'un numéro sur le cylindre
///
/// Renvoie les `2 * radius + 1` numéros centrés sur `number`, dans l'ordre
/// du cylindre (voisins anti-horaires, le numéro, voisins horaires), avec
/// wraparound aux extrémités de la table.
///
/// Cas limites :
/// - radius 0 → séquence vide
/// - numéro hors cylindre (> 36) → séquence vide
///
/// # Exemple
/// ```
/// use lazyroulette::models::wheel::neighbors;
///
/// // Les voisins directs du zéro sont 26 et 32
/// assert_eq!(neighbors(0, 1), vec![26, 0, 32]);
/// ```
pub fn neighbors(number: u8, radius: usize) -> Vec<u8> {
    if radius == 0 {
        return Vec::new();
    }

    let center = match wheel_position(number) {
        Some(pos) => pos,
        None => return Vec::new(),
    };

    let len = WHEEL_ORDER.len();

    // CONCEPT RUST : Arithmétique modulaire sans underflow
    // - (center + len - radius) % len évite un usize négatif
    // - On parcourt 2*radius + 1 positions consécutives du cylindre
    (0..=2 * radius)
        .map(|i| {
            let pos = (center + len - (radius % len) + i) % len;
            WHEEL_ORDER[pos]
        })
        .collect()
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_order_is_a_permutation() {
        // Le cylindre contient chaque numéro 0-36 exactement une fois
        let mut seen = [false; 37];
        for &n in WHEEL_ORDER.iter() {
            assert!(!seen[n as usize], "numéro {} en double", n);
            seen[n as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_wheel_position() {
        assert_eq!(wheel_position(0), Some(0));
        assert_eq!(wheel_position(32), Some(1));
        assert_eq!(wheel_position(26), Some(36));
        assert_eq!(wheel_position(37), None);
    }

    #[test]
    fn test_neighbors_of_zero() {
        // Wraparound : 26 est le dernier de la table, 32 le deuxième
        assert_eq!(neighbors(0, 1), vec![26, 0, 32]);
        assert_eq!(neighbors(0, 2), vec![3, 26, 0, 32, 15]);
    }

    #[test]
    fn test_neighbors_mid_wheel() {
        // 17 est entouré de 25 et 34 sur le cylindre
        assert_eq!(neighbors(17, 1), vec![25, 17, 34]);
        assert_eq!(neighbors(17, 2), vec![2, 25, 17, 34, 6]);
    }

    #[test]
    fn test_neighbors_radius_zero_is_empty() {
        assert!(neighbors(17, 0).is_empty());
    }

    #[test]
    fn test_neighbors_off_wheel_is_empty() {
        assert!(neighbors(37, 2).is_empty());
        assert!(neighbors(255, 1).is_empty());
    }

    #[test]
    fn test_neighbors_length() {
        // 2r + 1 numéros pour tout numéro du cylindre
        for n in 0..=36u8 {
            for r in 1..=4usize {
                let ns = neighbors(n, r);
                assert_eq!(ns.len(), 2 * r + 1);
                // Le numéro demandé est bien au centre
                assert_eq!(ns[r], n);
            }
        }
    }
}
