// ============================================================================
// LazyRoulette - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod analysis; // Fréquences et suggestions
pub mod api;      // Import du flux de résultats
pub mod app;      // État de l'application
pub mod models;   // Modèle de la roulette européenne
pub mod storage;  // Persistance de la session
pub mod ui;       // Interface utilisateur
