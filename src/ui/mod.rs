// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod dashboard; // Rendu de l'interface principale
pub mod events;    // Gestion des événements clavier
pub mod stats;     // Rendu de l'écran statistiques

// Re-exports pour simplifier les imports
pub use dashboard::render;
pub use events::{Event, EventHandler};
