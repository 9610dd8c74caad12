// ============================================================================
// Module : models
// ============================================================================
// Ce module contient le modèle de domaine de la roulette européenne
//
// CONCEPT RUST : Modules et visibilité
// - "pub mod" : déclare un sous-module publique (accessible depuis l'extérieur)
// - Sans "pub", le module serait privé au crate
// ============================================================================

pub mod number; // Couleur et propriétés des numéros (fichier number.rs)
pub mod spin;   // Résultats enregistrés et session (fichier spin.rs)
pub mod wheel;  // Ordre du cylindre et voisins (fichier wheel.rs)

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use lazyroulette::models::spin::Session;
// On peut faire : use lazyroulette::models::Session;
pub use number::{color_of, Half, NumberColor, NumberProperties, Parity, RED_NUMBERS};
pub use spin::{Session, Source, SpinResult, Window};
pub use wheel::{neighbors, wheel_position, WHEEL_ORDER};
