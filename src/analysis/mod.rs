// ============================================================================
// Module : analysis
// ============================================================================
// Cœur analytique : fréquences sur la fenêtre courante et génération
// des suggestions de mise affichées sur le dashboard
// ============================================================================

pub mod frequency; // Table de comptage et classements chauds/froids
pub mod strategy;  // Suggestions pleins / voisins

// Re-export des types principaux
pub use frequency::FrequencyTable;
pub use strategy::{suggest, Strategy, Suggestion};
