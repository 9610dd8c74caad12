// ============================================================================
// LazyRoulette - Dashboard d'analyse de roulette européenne
// ============================================================================
// Programme TUI : historique des tirages, statistiques de fréquence et
// suggestions de mise (pleins / voisins du numéro dominant)
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle infinie qui gère événements et rendering
// 3. Async dans sync : tokio::runtime::Runtime pour l'import réseau
// 4. RAII : restauration automatique du terminal
// ============================================================================

use std::io;
use std::sync::{mpsc, Arc, Mutex};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info, warn};

use lazyroulette::api::fetch_feed;
use lazyroulette::app::App;
use lazyroulette::storage;
use lazyroulette::ui::{events::EventHandler, render};

/// Variable d'environnement contenant l'URL du flux de résultats
const FEED_URL_ENV: &str = "LAZYROULETTE_FEED_URL";

// ============================================================================
// AppCommand : Commandes pour le worker thread
// ============================================================================
// CONCEPT RUST : Command pattern avec channels
// - L'event loop envoie des commandes au worker thread
// - Le worker thread exécute les tâches async (fetch réseau)
// - Communication via mpsc channels (multi-producer, single-consumer)
// ============================================================================

/// Commandes envoyées au worker thread pour exécuter des tâches async
#[derive(Debug, Clone)]
enum AppCommand {
    /// Importer l'historique des tirages depuis le flux distant
    ImportFeed { url: String },
}

/// Résultats renvoyés par le worker thread
#[derive(Debug)]
enum AppResult {
    /// Import du flux terminé avec succès
    FeedImported { numbers: Vec<u8> },

    /// Erreur lors de l'import
    ImportError { error: String },
}

// ============================================================================
// Initialisation du logging
// ============================================================================
// CONCEPT : Logging dans une app TUI
// - Les println! ne fonctionnent pas une fois le TUI lancé
// - On log vers un fichier à la place, avec rotation quotidienne
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// CONCEPT RUST : Tracing subscriber
/// - Registry : point central des logs
/// - EnvFilter : filtre par niveau (RUST_LOG env var)
/// - RollingFileAppender : rotation automatique
///
/// # Utilisation
/// ```bash
/// # Voir les logs en temps réel
/// tail -f ./logs/lazyroulette.log
///
/// # Contrôler le niveau de log
/// RUST_LOG=lazyroulette=trace cargo run
/// ```
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::PathBuf::from("./logs");

    // Crée le répertoire s'il n'existe pas
    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    // Configure la rotation quotidienne des logs
    let file_appender =
        RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "lazyroulette.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender) // Écrit dans le fichier
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true) // Inclut le module (ex: lazyroulette::api::feed)
                .with_thread_ids(true) // Inclut l'ID du thread (utile pour async)
                .with_line_number(true), // Inclut le numéro de ligne
        )
        .with(
            // Filtre les logs par niveau
            // - RUST_LOG=debug : tous les logs debug+
            // - Par défaut : debug pour lazyroulette, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lazyroulette=debug,info".into()),
        )
        .init();

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    // Initialize logging FIRST
    // - Si init échoue, on affiche l'erreur et continue quand même
    init_logging().unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
        eprintln!("   Continuing without logging...");
    });

    info!("LazyRoulette starting up");

    // Recharge la session précédente depuis le disque
    info!("Loading saved session");
    let session = storage::load_session();

    // Setup du terminal en mode TUI
    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    // Crée l'état de l'application avec la session rechargée
    // CONCEPT RUST : Arc<Mutex<>> pour partage entre threads
    // - Arc : Reference counting pour ownership partagé
    // - Mutex : Protection contre les data races
    // - Permet au worker thread et à l'UI d'accéder à App
    let app = Arc::new(Mutex::new(App::with_session(session)));

    // Crée les channels pour communication avec le worker
    let (command_tx, command_rx) = mpsc::channel::<AppCommand>();
    let (result_tx, result_rx) = mpsc::channel::<AppResult>();

    // Lance le worker thread en arrière-plan
    info!("Spawning background worker thread");
    spawn_background_worker(command_rx, result_tx, app.clone());

    // Crée le gestionnaire d'événements
    let events = EventHandler::new();

    // Exécute l'event loop
    info!("Starting event loop");
    let result = run(&mut terminal, app.clone(), &events, command_tx, result_rx);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    // Sauvegarde la session avant de quitter
    {
        let app_lock = app.lock().unwrap();
        if let Err(e) = storage::save_session(&app_lock.session) {
            warn!(error = ?e, "Failed to save session");
            eprintln!("⚠️  Impossible de sauvegarder la session : {}", e);
        }
    }

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Background Worker Thread
// ============================================================================
// CONCEPT RUST : Background async worker avec channels
// - Thread séparé qui traite les commandes async
// - Reçoit des AppCommand via un channel (command_rx)
// - Envoie des AppResult via un autre channel (result_tx)
// - Permet de faire l'import réseau sans bloquer l'UI
// ============================================================================

/// Worker thread qui exécute les tâches async en arrière-plan
///
/// CONCEPT RUST : Thread + async runtime
/// - std::thread::spawn() : crée un thread OS
/// - tokio::runtime::Runtime : runtime async dans ce thread
/// - mpsc channels : communication inter-thread
fn spawn_background_worker(
    command_rx: mpsc::Receiver<AppCommand>,
    result_tx: mpsc::Sender<AppResult>,
    app: Arc<Mutex<App>>,
) {
    std::thread::spawn(move || {
        // Crée un runtime tokio pour ce thread
        let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

        // Boucle de traitement des commandes
        loop {
            match command_rx.recv() {
                Ok(command) => {
                    info!(?command, "Worker received command");

                    match command {
                        AppCommand::ImportFeed { url } => {
                            // Active l'indicateur de chargement
                            {
                                let mut app_lock = app.lock().unwrap();
                                app_lock.start_loading(Some("Import du flux en cours...".into()));
                            }

                            // Exécute le fetch de manière async
                            // CONCEPT : block_on dans un worker thread
                            // - block_on() bloque le thread worker (pas l'UI)
                            let result = runtime.block_on(async { fetch_feed(&url).await });

                            match result {
                                Ok(numbers) => {
                                    info!(numbers = numbers.len(), "Feed imported successfully");
                                    let _ = result_tx.send(AppResult::FeedImported { numbers });
                                }
                                Err(e) => {
                                    error!(error = ?e, "Failed to import feed");
                                    let _ = result_tx.send(AppResult::ImportError {
                                        error: e.to_string(),
                                    });
                                }
                            }

                            // Désactive l'indicateur de chargement
                            {
                                let mut app_lock = app.lock().unwrap();
                                app_lock.stop_loading();
                            }
                        }
                    }
                }
                Err(_) => {
                    // Channel fermé, on quitte
                    info!("Worker thread exiting (channel closed)");
                    break;
                }
            }
        }
    });
}

// ============================================================================
// Event Loop Principal
// ============================================================================
// CONCEPT : Event Loop Pattern
// - Loop infinie : while app.is_running()
// - À chaque itération : résultats worker → render → input → update
// ============================================================================

/// Exécute la boucle principale de l'application
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: Arc<Mutex<App>>,
    events: &EventHandler,
    command_tx: mpsc::Sender<AppCommand>,
    result_rx: mpsc::Receiver<AppResult>,
) -> Result<()> {
    loop {
        // Vérifie si l'app est toujours en cours d'exécution
        // CONCEPT : Lock scope minimisé
        {
            let app_lock = app.lock().unwrap();
            if !app_lock.is_running() {
                break;
            }
        }

        // ========================================
        // 0. RÉSULTATS : Traite les résultats du worker
        // ========================================
        // CONCEPT : Non-blocking receive avec try_recv
        match result_rx.try_recv() {
            Ok(result) => match result {
                AppResult::FeedImported { numbers } => {
                    let mut app_lock = app.lock().unwrap();
                    info!(numbers = numbers.len(), "Recording imported results");
                    app_lock.record_imported(&numbers);
                    app_lock.set_status(format!("{} tirages importés", numbers.len()));
                }
                AppResult::ImportError { error } => {
                    error!(error = %error, "Feed import failed");
                    let mut app_lock = app.lock().unwrap();
                    app_lock.set_status(format!("Échec de l'import : {}", error));
                }
            },
            Err(mpsc::TryRecvError::Empty) => {
                // Pas de résultat, c'est normal
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                error!("Worker thread disconnected!");
                // Continue quand même, mais le worker est mort
            }
        }

        // ========================================
        // 1. RENDER : Dessine l'interface
        // ========================================
        {
            let app_clone = app.clone();
            terminal.draw(|frame| {
                let app_lock = app_clone.lock().unwrap();
                render(frame, &app_lock);
            })?;
        }

        // ========================================
        // 2. INPUT : Traite les événements
        // ========================================
        match events.next() {
            Ok(event) => {
                let mut app_lock = app.lock().unwrap();
                handle_event(&mut app_lock, event, &command_tx);
            }
            Err(_) => {
                // Erreur lors de la lecture d'événement
            }
        }

        // ========================================
        // 3. UPDATE : Met à jour l'état
        // ========================================
        {
            let mut app_lock = app.lock().unwrap();
            app_lock.tick();
        }
    }

    Ok(())
}

// ============================================================================
// Gestion des événements
// ============================================================================
// CONCEPT : Event Handler Pattern
// - Sépare la logique de gestion des événements
// - Modifie l'état de app selon l'événement
// ============================================================================

/// Traite un événement et met à jour l'état de l'application
///
/// CONCEPT RUST : Pattern matching avec guards
/// - Guard clauses (if) pour filtrer les événements selon l'écran actuel
fn handle_event(
    app: &mut App,
    event: lazyroulette::ui::events::Event,
    command_tx: &mpsc::Sender<AppCommand>,
) {
    use lazyroulette::ui::events::{
        get_char_from_event, is_add_event, is_backspace_event, is_digit_event, is_down_event,
        is_enter_event, is_escape_event, is_import_event, is_next_window_event,
        is_previous_window_event, is_quit_event, is_stats_event, is_undo_event, is_up_event, Event,
    };

    match event {
        Event::Key(_) if is_quit_event(&event) && !app.is_in_input_mode() => {
            // Touche 'q' : quit confirmation two-step
            // - Première pression : active confirm_quit
            // - Deuxième pression : quit réel
            if app.is_awaiting_quit_confirmation() {
                info!("User confirmed quit");
                app.quit();
            } else {
                info!("User requested quit (awaiting confirmation)");
                app.request_quit();
            }
        }

        // 'u' : annuler le dernier tirage (seulement sur Dashboard)
        Event::Key(_) if is_undo_event(&event) && app.is_on_dashboard() => {
            // CONCEPT : Two-step undo confirmation (Vim-like)
            if !app.session.is_empty() {
                if app.is_awaiting_undo_confirmation() {
                    let number = app.session.last().map(|r| r.number).unwrap_or_default();
                    info!(number, "User confirmed undo");
                    app.undo_last();
                } else {
                    info!("User requested undo (awaiting confirmation)");
                    app.request_undo();
                }
            }
        }

        // 'a' : saisir un numéro (seulement sur Dashboard)
        Event::Key(_) if is_add_event(&event) && app.is_on_dashboard() => {
            info!("User requested number input");
            app.cancel_quit();
            app.cancel_undo();
            app.clear_status();
            app.start_input("Numéro (0-36) : ".to_string());
        }

        // 'i' : importer le flux distant (seulement sur Dashboard)
        Event::Key(_) if is_import_event(&event) && app.is_on_dashboard() => {
            app.cancel_quit();
            app.cancel_undo();

            match std::env::var(FEED_URL_ENV) {
                Ok(url) if !url.trim().is_empty() => {
                    info!(url = %url, "User requested feed import");
                    let _ = command_tx.send(AppCommand::ImportFeed { url });
                }
                _ => {
                    debug!("Feed URL not configured, ignoring import request");
                    app.set_status(format!("Flux non configuré ({} absent)", FEED_URL_ENV));
                }
            }
        }

        // Flèches haut/bas : changer de stratégie de suggestion
        Event::Key(_) if is_up_event(&event) && app.is_on_dashboard() => {
            app.cancel_quit();
            app.cancel_undo();
            app.next_strategy();
            debug!(strategy = %app.current_strategy.label(), "User changed strategy");
        }
        Event::Key(_) if is_down_event(&event) && app.is_on_dashboard() => {
            app.cancel_quit();
            app.cancel_undo();
            app.previous_strategy();
            debug!(strategy = %app.current_strategy.label(), "User changed strategy");
        }

        // 's' ou Enter : afficher les statistiques
        Event::Key(_)
            if (is_stats_event(&event) || is_enter_event(&event)) && app.is_on_dashboard() =>
        {
            app.cancel_quit();
            app.cancel_undo();
            // CONCEPT : State transition
            // Dashboard → StatsView
            info!("User opened stats view");
            app.show_stats();
        }

        // ESC : retour au dashboard depuis StatsView
        Event::Key(_) if is_escape_event(&event) && app.is_on_stats() => {
            app.cancel_quit();
            debug!("User returned to dashboard");
            app.show_dashboard();
        }

        // 'h' / 'l' : changer la fenêtre d'analyse (Dashboard et StatsView)
        Event::Key(_) if is_next_window_event(&event) && !app.is_in_input_mode() => {
            app.cancel_quit();
            app.cancel_undo();
            app.next_window();
            info!(window = %app.current_window.label(), "User changed to next window");
        }
        Event::Key(_) if is_previous_window_event(&event) && !app.is_in_input_mode() => {
            app.cancel_quit();
            app.cancel_undo();
            app.previous_window();
            info!(window = %app.current_window.label(), "User changed to previous window");
        }

        // ========================================
        // Input Mode : Gestion de la saisie
        // ========================================

        // ESC : annuler le mode input
        Event::Key(_) if is_escape_event(&event) && app.is_in_input_mode() => {
            info!("User cancelled input");
            app.cancel_input();
        }

        // Enter : valider le mode input et enregistrer le numéro
        Event::Key(_) if is_enter_event(&event) && app.is_in_input_mode() => {
            let raw = app.submit_input();
            let trimmed = raw.trim();

            // La validation de plage se fait ici, à la frontière de saisie
            match trimmed.parse::<u8>() {
                Ok(number) if number <= 36 => {
                    info!(number, "User recorded number");
                    app.record_number(number);
                    app.clear_status();
                }
                _ if trimmed.is_empty() => {
                    debug!("Empty input, ignoring");
                }
                _ => {
                    warn!(input = %trimmed, "Invalid number input");
                    app.set_status(format!("Numéro invalide : {}", trimmed));
                }
            }
        }

        // Backspace : supprimer le dernier chiffre
        Event::Key(_) if is_backspace_event(&event) && app.is_in_input_mode() => {
            app.backspace();
        }

        // Chiffres : ajouter au buffer
        Event::Key(_) if is_digit_event(&event) && app.is_in_input_mode() => {
            if let Some(c) = get_char_from_event(&event) {
                app.append_digit(c);
            }
        }

        Event::Tick => {
            // Tick régulier : rien à faire pour l'instant
        }

        Event::Key(_) => {
            // Toute autre touche : annule les confirmations si actives
            app.cancel_quit();
            app.cancel_undo();
        }

        _ => {
            // Autres événements : ignorés
        }
    }
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================
// CONCEPT RUST : Terminal raw mode
// - Raw mode : on reçoit tous les caractères directement
// - Alternate screen : écran secondaire (ne pollue pas l'historique)
//
// IMPORTANT : Toujours restaurer le terminal avant de quitter !
// ============================================================================

/// Configure le terminal en mode TUI
///
/// CONCEPT RUST : Error propagation avec ?
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Active le raw mode
    enable_raw_mode()?;

    // Configure le terminal
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture // Active la souris (optionnel)
    )?;

    // Crée le backend crossterm
    let backend = CrosstermBackend::new(stdout);

    // Crée le terminal ratatui
    Terminal::new(backend).map_err(|e| e.into())
}

/// Restaure le terminal à son état normal
///
/// CONCEPT : Cleanup et RAII
/// - Appelé dans main() même en cas d'erreur
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    // Désactive le raw mode
    disable_raw_mode()?;

    // Restaure le terminal
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    // Affiche le curseur
    terminal.show_cursor()?;

    Ok(())
}
