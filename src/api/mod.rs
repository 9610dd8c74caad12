// ============================================================================
// Module : api
// ============================================================================
// Ce module contient les clients réseau : import de l'historique des
// tirages depuis un flux JSON distant
// ============================================================================

pub mod feed; // Client du flux de résultats

// Re-export des fonctions principales
pub use feed::fetch_feed;
