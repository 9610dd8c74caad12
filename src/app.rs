// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// CONCEPTS RUST :
// 1. State Management : centraliser l'état dans une seule structure
// 2. Mutabilité contrôlée : &mut self pour modifier l'état
// 3. Données dérivées : suggestions et fréquences recalculées au rendu,
//    jamais stockées ici (la session est la seule source de vérité)
// ============================================================================

use crate::analysis::{suggest, Strategy, Suggestion};
use crate::models::{Session, Source, Window};

// ============================================================================
// Enum : Screen
// ============================================================================
// CONCEPT RUST : Enums pour state machines
// - Représente les différents écrans de l'application
// - Pattern "State Machine" : un seul écran actif à la fois
// ============================================================================

/// Écrans de l'application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Vue principale : historique récent et suggestion courante
    Dashboard,

    /// Vue statistiques : chauds/froids et répartitions du tapis
    StatsView,

    /// Mode saisie : capture d'un numéro au clavier
    /// CONCEPT : Modal input mode (Vim-like)
    /// - Capture les chiffres pour construire un buffer
    /// - Enter valide, ESC annule
    InputMode,
}

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Historique des tirages de la session
    pub session: Session,

    /// Écran actuellement affiché
    pub current_screen: Screen,

    /// Fenêtre d'analyse courante (10, 20, 30, 50 ou toute la session)
    /// Modifiable avec les touches h et l
    pub current_window: Window,

    /// Stratégie de suggestion courante (pleins ou voisins)
    /// Modifiable avec les flèches haut/bas
    pub current_strategy: Strategy,

    /// Indique si l'utilisateur a demandé à quitter (attend confirmation)
    /// CONCEPT : Two-step quit pour éviter les sorties accidentelles
    pub confirm_quit: bool,

    /// Indique si l'utilisateur a demandé à annuler le dernier tirage
    /// CONCEPT : Two-step undo, même mécanique que le quit
    pub confirm_undo: bool,

    /// Indique si un import de flux est en cours
    pub is_loading: bool,

    /// Message d'état affiché dans le footer (erreur d'import, etc.)
    pub status_message: Option<String>,

    /// Buffer de saisie pour le mode Input
    pub input_buffer: String,

    /// Prompt affiché en mode Input
    pub input_prompt: String,
}

impl App {
    /// Crée une nouvelle instance de App avec une session vide
    pub fn new() -> Self {
        Self::with_session(Session::new())
    }

    /// Crée une App avec une session rechargée du disque
    pub fn with_session(session: Session) -> Self {
        Self {
            running: true,
            session,
            current_screen: Screen::Dashboard,
            current_window: Window::default(),     // 20 derniers tirages
            current_strategy: Strategy::default(), // Pleins
            confirm_quit: false,
            confirm_undo: false,
            is_loading: false,
            status_message: None,
            input_buffer: String::new(),
            input_prompt: String::new(),
        }
    }

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tick : appelé à chaque itération de la boucle
    ///
    /// CONCEPT : Event Loop Pattern
    /// - Permet de mettre à jour l'état même sans événement utilisateur
    /// - Rien à faire tant que l'app n'a ni animation ni timer
    pub fn tick(&mut self) {}

    // ========================================================================
    // Navigation entre écrans
    // ========================================================================

    /// Affiche la vue statistiques
    pub fn show_stats(&mut self) {
        self.current_screen = Screen::StatsView;
    }

    /// Retourne à la vue dashboard
    pub fn show_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard;
    }

    /// Vérifie si on est sur le dashboard
    pub fn is_on_dashboard(&self) -> bool {
        self.current_screen == Screen::Dashboard
    }

    /// Vérifie si on est sur la vue statistiques
    pub fn is_on_stats(&self) -> bool {
        self.current_screen == Screen::StatsView
    }

    // ========================================================================
    // Fenêtre et stratégie
    // ========================================================================

    /// Passe à la fenêtre d'analyse suivante (touche l)
    pub fn next_window(&mut self) {
        self.current_window = self.current_window.next();
    }

    /// Passe à la fenêtre d'analyse précédente (touche h)
    pub fn previous_window(&mut self) {
        self.current_window = self.current_window.previous();
    }

    /// Passe à la stratégie de suggestion suivante
    pub fn next_strategy(&mut self) {
        self.current_strategy = self.current_strategy.next();
    }

    /// Passe à la stratégie de suggestion précédente
    pub fn previous_strategy(&mut self) {
        self.current_strategy = self.current_strategy.previous();
    }

    /// Calcule la suggestion courante
    ///
    /// CONCEPT : Donnée dérivée
    /// - Recalculée à la demande depuis la session et la fenêtre
    /// - None tant qu'aucun tirage n'est enregistré
    pub fn current_suggestion(&self) -> Option<Suggestion> {
        let numbers = self.session.window_numbers(self.current_window);
        suggest(self.current_strategy, &numbers)
    }

    // ========================================================================
    // Enregistrement des tirages
    // ========================================================================

    /// Enregistre un numéro saisi manuellement
    pub fn record_number(&mut self, number: u8) {
        self.session.record(number, Source::Manual);
    }

    /// Enregistre une liste de numéros importés du flux
    pub fn record_imported(&mut self, numbers: &[u8]) {
        for &n in numbers {
            self.session.record(n, Source::Import);
        }
    }

    // ========================================================================
    // Confirmations two-step
    // ========================================================================

    /// Demande la confirmation de quitter
    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    /// Annule la demande de quit
    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    /// Vérifie si on attend la confirmation de quit
    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }

    /// Demande la confirmation d'annulation du dernier tirage
    pub fn request_undo(&mut self) {
        self.confirm_undo = true;
    }

    /// Annule la demande d'undo
    pub fn cancel_undo(&mut self) {
        self.confirm_undo = false;
    }

    /// Vérifie si on attend la confirmation d'undo
    pub fn is_awaiting_undo_confirmation(&self) -> bool {
        self.confirm_undo
    }

    /// Retire le dernier tirage enregistré
    pub fn undo_last(&mut self) {
        self.session.undo_last();
        self.confirm_undo = false;
    }

    // ========================================================================
    // État de chargement et messages
    // ========================================================================

    /// Démarre le chargement avec un message optionnel
    pub fn start_loading(&mut self, message: Option<String>) {
        self.is_loading = true;
        self.status_message = message;
    }

    /// Termine le chargement
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
    }

    /// Affiche un message d'état dans le footer
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Efface le message d'état
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // ========================================================================
    // Input Mode Management
    // ========================================================================

    /// Entre en mode input avec un prompt donné
    ///
    /// CONCEPT : Modal input (Vim-like)
    pub fn start_input(&mut self, prompt: String) {
        self.current_screen = Screen::InputMode;
        self.input_buffer.clear();
        self.input_prompt = prompt;
    }

    /// Annule le mode input et retourne au dashboard
    pub fn cancel_input(&mut self) {
        self.current_screen = Screen::Dashboard;
        self.input_buffer.clear();
        self.input_prompt.clear();
    }

    /// Récupère la valeur saisie et retourne au dashboard
    pub fn submit_input(&mut self) -> String {
        let value = self.input_buffer.clone();
        self.current_screen = Screen::Dashboard;
        self.input_buffer.clear();
        self.input_prompt.clear();
        value
    }

    /// Ajoute un chiffre au buffer d'input
    ///
    /// Deux chiffres suffisent pour 0-36 : on borne le buffer pour éviter
    /// les saisies du type "365"
    pub fn append_digit(&mut self, c: char) {
        if self.input_buffer.len() < 2 {
            self.input_buffer.push(c);
        }
    }

    /// Supprime le dernier chiffre du buffer
    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Vérifie si on est en mode input
    pub fn is_in_input_mode(&self) -> bool {
        self.current_screen == Screen::InputMode
    }
}

// ============================================================================
// Trait Default
// ============================================================================
// Convention Rust : si new() ne prend pas de paramètres, implémenter Default
// ============================================================================

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_creation() {
        let app = App::new();
        assert!(app.is_running());
        assert!(app.session.is_empty());
        assert!(app.is_on_dashboard());
        assert_eq!(app.current_window, Window::W20);
        assert_eq!(app.current_strategy, Strategy::StraightUp);
    }

    #[test]
    fn test_app_quit() {
        let mut app = App::new();
        app.quit();
        assert!(!app.is_running());
    }

    #[test]
    fn test_screen_transitions() {
        let mut app = App::new();

        app.show_stats();
        assert!(app.is_on_stats());

        app.show_dashboard();
        assert!(app.is_on_dashboard());
    }

    #[test]
    fn test_record_and_undo() {
        let mut app = App::new();
        app.record_number(17);
        app.record_number(0);
        assert_eq!(app.session.len(), 2);

        app.request_undo();
        assert!(app.is_awaiting_undo_confirmation());

        app.undo_last();
        assert_eq!(app.session.len(), 1);
        assert!(!app.is_awaiting_undo_confirmation());
        assert_eq!(app.session.last().unwrap().number, 17);
    }

    #[test]
    fn test_record_imported_tags_source() {
        let mut app = App::new();
        app.record_imported(&[5, 12, 5]);

        assert_eq!(app.session.len(), 3);
        assert_eq!(app.session.last().unwrap().source, Source::Import);
    }

    #[test]
    fn test_suggestion_none_when_empty() {
        let app = App::new();
        assert!(app.current_suggestion().is_none());
    }

    #[test]
    fn test_suggestion_follows_strategy() {
        let mut app = App::new();
        for _ in 0..3 {
            app.record_number(17);
        }
        app.record_number(4);

        let suggestion = app.current_suggestion().unwrap();
        assert_eq!(suggestion.strategy, Strategy::StraightUp);
        assert_eq!(suggestion.numbers[0], 17);

        app.next_strategy();
        let suggestion = app.current_suggestion().unwrap();
        assert_eq!(suggestion.strategy, Strategy::Neighbors);
        assert_eq!(suggestion.numbers.len(), 5);
        assert_eq!(suggestion.numbers[2], 17);
    }

    #[test]
    fn test_window_cycling() {
        let mut app = App::new();
        app.next_window();
        assert_eq!(app.current_window, Window::W30);
        app.previous_window();
        app.previous_window();
        assert_eq!(app.current_window, Window::W10);
    }

    #[test]
    fn test_input_mode() {
        let mut app = App::new();
        app.start_input("Numéro : ".to_string());
        assert!(app.is_in_input_mode());

        app.append_digit('3');
        app.append_digit('6');
        app.append_digit('5'); // Ignoré : buffer borné à 2 chiffres
        assert_eq!(app.input_buffer, "36");

        app.backspace();
        assert_eq!(app.input_buffer, "3");

        let value = app.submit_input();
        assert_eq!(value, "3");
        assert!(app.is_on_dashboard());
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn test_quit_confirmation_flow() {
        let mut app = App::new();
        app.request_quit();
        assert!(app.is_awaiting_quit_confirmation());

        app.cancel_quit();
        assert!(!app.is_awaiting_quit_confirmation());
        assert!(app.is_running());
    }
}
