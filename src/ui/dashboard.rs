// ============================================================================
// Dashboard - Rendu de l'interface principale
// ============================================================================
// Dessine l'interface TUI en utilisant les widgets de ratatui
//
// CONCEPTS RATATUI :
// 1. Frame : surface de dessin
// 2. Widgets : composants UI (Block, Paragraph, List, etc.)
// 3. Layout : découpage de l'espace en zones
// 4. Style : couleurs et attributs de texte
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Screen};
use crate::models::{color_of, NumberColor, SpinResult};
use crate::ui::stats;

/// Dessine l'interface complète
///
/// CONCEPT RUST : Routing avec match sur enum
/// - Pattern matching sur app.current_screen
/// - Le compilateur garantit l'exhaustivité (tous les cas gérés)
pub fn render(frame: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Dashboard => {
            render_dashboard(frame, app);
        }
        Screen::StatsView => {
            stats::render_stats(frame, app, frame.size());
        }
        Screen::InputMode => {
            // Affiche le dashboard avec l'input mode en bas
            render_input_mode(frame, app);
        }
    }
}

/// Dessine le dashboard (historique + suggestion)
fn render_dashboard(frame: &mut Frame, app: &App) {
    let size = frame.size();
    let chunks = create_layout(size);

    render_header(frame, app, chunks[0]);
    render_history(frame, app, chunks[1]);
    render_suggestion(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);
}

/// Crée le layout principal (header, historique, suggestion, footer)
///
/// CONCEPT RATATUI : Layout
/// - split() découpe un Rect en plusieurs zones
/// - Constraints définissent les tailles
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header : 3 lignes
            Constraint::Min(0),    // Historique : tout le reste
            Constraint::Length(4), // Suggestion : 4 lignes
            Constraint::Length(3), // Footer : 3 lignes
        ])
        .split(area)
        .to_vec() // Convertit Rc<[Rect]> en Vec<Rect>
}

/// Retourne le style terminal associé à la couleur d'un numéro
///
/// Le noir pur serait invisible sur fond sombre : on l'affiche en blanc,
/// seuls le rouge et le vert sont colorés.
fn number_style(number: u8) -> Style {
    match color_of(number) {
        NumberColor::Red => Style::default().fg(Color::Red),
        NumberColor::Black => Style::default().fg(Color::White),
        NumberColor::Green => Style::default().fg(Color::Green),
    }
}

// ============================================================================
// Header : Titre et fenêtre d'analyse courante
// ============================================================================

/// Dessine le header avec le titre et les réglages courants
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" LazyRoulette ")
        .title_alignment(Alignment::Center);

    // Indicateur d'import en cours dans le coin du header
    let loading = if app.is_loading { "  ⟳" } else { "" };

    let text = vec![Line::from(vec![
        Span::styled(
            format!("{} tirages{}", app.session.len(), loading),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  fenêtre : "),
        Span::styled(
            app.current_window.label(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  stratégie : "),
        Span::styled(
            app.current_strategy.label(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Historique : les tirages récents
// ============================================================================

/// Dessine l'historique des tirages, le plus récent en premier
///
/// CONCEPT RATATUI : List widget
/// - Un ListItem par tirage, coloré selon le numéro
fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Historique ");

    if app.session.is_empty() {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Aucun tirage enregistré — [a] pour saisir un numéro",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
        return;
    }

    // La fenêtre visible est bornée par la hauteur de la zone (bordures
    // comprises) : inutile de construire des milliers de ListItem
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = app
        .session
        .results()
        .iter()
        .rev()
        .take(visible)
        .map(format_result_line)
        .map(ListItem::new)
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// Formate une ligne d'historique : numéro coloré, couleur, provenance, heure
fn format_result_line(result: &SpinResult) -> Line<'static> {
    let props = crate::models::NumberProperties::of(result.number);

    let groups = match (props.dozen, props.column) {
        (Some(d), Some(c)) => format!("D{} C{}", d, c),
        _ => "—".to_string(),
    };

    Line::from(vec![
        Span::styled(
            format!(" {:>2} ", result.number),
            number_style(result.number).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:<6}", color_of(result.number).label()),
            number_style(result.number),
        ),
        Span::raw(format!(" {:<6}", groups)),
        Span::styled(
            format!(" {:<7}", result.source.label()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            result.timestamp.format(" %H:%M:%S").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

// ============================================================================
// Suggestion : le panneau de mise suggérée
// ============================================================================

/// Dessine le panneau de suggestion pour la stratégie courante
fn render_suggestion(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Suggestion : {} ", app.current_strategy.label()));

    let lines = match app.current_suggestion() {
        Some(suggestion) => {
            // Chaque numéro suggéré dans sa couleur du tapis
            let mut spans = Vec::new();
            for (i, &n) in suggestion.numbers.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(Span::styled(
                    format!("{:>2}", n),
                    number_style(n).add_modifier(Modifier::BOLD),
                ));
            }

            vec![
                Line::from(spans),
                Line::from(Span::styled(
                    format!("calculée sur {} tirages", suggestion.basis),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Pas encore de suggestion",
                Style::default().fg(Color::Gray),
            )),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Footer : Instructions
// ============================================================================

/// Dessine le footer avec les raccourcis clavier
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let shortcuts = if app.is_awaiting_undo_confirmation() {
        // Message de confirmation d'undo
        let last = app
            .session
            .last()
            .map(|r| r.number.to_string())
            .unwrap_or_else(|| "?".to_string());

        Line::from(vec![
            Span::styled(
                "⚠  Appuyez sur ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "[u]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                format!(" à nouveau pour retirer le {} ou autre touche pour annuler ⚠", last),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else if app.is_awaiting_quit_confirmation() {
        // Message de confirmation de quit
        Line::from(vec![
            Span::styled(
                "⚠  Appuyez sur ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                " à nouveau pour quitter, ou n'importe quelle autre touche pour annuler ⚠",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else if let Some(message) = &app.status_message {
        // Message d'état (import en cours, erreur de flux, etc.)
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Magenta),
        ))
    } else {
        // Shortcuts normaux avec différentes couleurs
        Line::from(vec![
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quit  "),
            Span::styled(
                "[a]",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Numéro  "),
            Span::styled(
                "[u]",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Undo  "),
            Span::styled(
                "[s]",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Stats  "),
            Span::styled(
                "[↑↓]",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Stratégie  "),
            Span::styled(
                "[h l]",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Fenêtre  "),
            Span::styled(
                "[i]",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Import"),
        ])
    };

    let paragraph = Paragraph::new(vec![shortcuts])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Input Mode : Saisie d'un numéro
// ============================================================================

/// Dessine le dashboard avec le mode input actif
///
/// CONCEPT : Modal input (Vim-like)
/// - Affiche l'historique en arrière-plan
/// - Affiche une ligne d'input en bas pour saisir le numéro
fn render_input_mode(frame: &mut Frame, app: &App) {
    let size = frame.size();
    let chunks = create_layout(size);

    render_header(frame, app, chunks[0]);
    render_history(frame, app, chunks[1]);
    render_suggestion(frame, app, chunks[2]);

    // Footer : affiche l'input line au lieu des shortcuts
    render_input_footer(frame, app, chunks[3]);
}

/// Dessine le footer en mode input avec la ligne de saisie
fn render_input_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green)); // Vert pour indiquer mode input

    let input_line = Line::from(vec![
        Span::styled(
            app.input_prompt.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.input_buffer.clone(), Style::default().fg(Color::White)),
        Span::styled(
            "█", // Curseur
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]);

    let help_line = Line::from(vec![
        Span::styled(
            "[Enter]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Confirm  "),
        Span::styled(
            "[ESC]",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Cancel"),
    ]);

    let paragraph = Paragraph::new(vec![input_line, help_line])
        .block(block)
        .alignment(Alignment::Left); // Alignement à gauche pour l'input

    frame.render_widget(paragraph, area);
}
