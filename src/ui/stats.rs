// ============================================================================
// Stats - Rendu de l'écran statistiques
// ============================================================================
// Affiche les numéros chauds/froids et les répartitions du tapis pour la
// fenêtre d'analyse courante
//
// CONCEPTS RUST :
// 1. Option handling : gérer l'absence de données (session vide)
// 2. Iterator chaining : transformer les comptages en lignes de texte
// 3. Rendu texte : barres proportionnelles en caractères pleins (█)
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::analysis::FrequencyTable;
use crate::app::App;
use crate::models::{color_of, NumberColor};

/// Nombre de numéros affichés dans les listes chauds/froids
const HOT_COLD_COUNT: usize = 5;

/// Largeur maximale des barres de répartition (en caractères)
const BAR_WIDTH: usize = 20;

// ============================================================================
// Fonction principale de rendu des statistiques
// ============================================================================

/// Dessine l'écran statistiques pour la fenêtre courante
///
/// CONCEPT RUST : Early return
/// - Si la session est vide, affiche un message et return
pub fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    if app.session.is_empty() {
        render_no_data(frame, area, "Aucun tirage à analyser");
        return;
    }

    let numbers = app.session.window_numbers(app.current_window);
    let table = FrequencyTable::from_numbers(numbers);

    // Layout : titre + deux colonnes (chauds/froids | répartitions) + footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Titre
            Constraint::Min(0),    // Contenu
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_title(frame, app, &table, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_hot_cold(frame, &table, columns[0]);
    render_distributions(frame, &table, columns[1]);

    render_footer(frame, chunks[2]);
}

/// Dessine le titre avec la fenêtre analysée
fn render_title(frame: &mut Frame, app: &App, table: &FrequencyTable, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Statistiques ")
        .title_alignment(Alignment::Center);

    let text = vec![Line::from(Span::styled(
        format!(
            "fenêtre : {} ({} tirages analysés)",
            app.current_window.label(),
            table.total()
        ),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Colonne gauche : numéros chauds et froids
// ============================================================================

/// Dessine les listes de numéros chauds et froids
fn render_hot_cold(frame: &mut Frame, table: &FrequencyTable, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Chauds / Froids ");

    let mut lines = vec![
        Line::from(Span::styled(
            "Numéros chauds",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    ];

    for n in table.hot(HOT_COLD_COUNT) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:>2}", n),
                number_style(n).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  × {}", table.count(n)),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Numéros froids",
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )));

    for n in table.cold(HOT_COLD_COUNT) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:>2}", n),
                number_style(n).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  × {}", table.count(n)),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Colonne droite : répartitions du tapis
// ============================================================================

/// Dessine les répartitions couleur / douzaine / colonne en barres texte
fn render_distributions(frame: &mut Frame, table: &FrequencyTable, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Répartitions ");

    let total = table.total().max(1) as u32;
    let (reds, blacks, greens) = table.color_counts();
    let dozens = table.dozen_counts();
    let columns = table.column_counts();

    let mut lines = vec![Line::from(Span::styled(
        "Couleurs",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.push(bar_line("Rouge", reds, total, Color::Red));
    lines.push(bar_line("Noir", blacks, total, Color::White));
    lines.push(bar_line("Vert", greens, total, Color::Green));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Douzaines",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, &count) in dozens.iter().enumerate() {
        lines.push(bar_line(&format!("D{}", i + 1), count, total, Color::Yellow));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Colonnes",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, &count) in columns.iter().enumerate() {
        lines.push(bar_line(&format!("C{}", i + 1), count, total, Color::Cyan));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Construit une ligne "label barre count" proportionnelle au total
///
/// CONCEPT : Rendu texte
/// - La barre est faite de caractères pleins, longueur ∝ count / total
fn bar_line(label: &str, count: u32, total: u32, color: Color) -> Line<'static> {
    let width = ((count as usize) * BAR_WIDTH) / (total as usize);
    let bar: String = "█".repeat(width);

    Line::from(vec![
        Span::raw(format!("  {:<6}", label)),
        Span::styled(bar, Style::default().fg(color)),
        Span::styled(
            format!(" {}", count),
            Style::default().fg(Color::Gray),
        ),
    ])
}

/// Retourne le style terminal associé à la couleur d'un numéro
fn number_style(number: u8) -> Style {
    match color_of(number) {
        NumberColor::Red => Style::default().fg(Color::Red),
        NumberColor::Black => Style::default().fg(Color::White),
        NumberColor::Green => Style::default().fg(Color::Green),
    }
}

// ============================================================================
// Fallback : pas de données
// ============================================================================

/// Affiche un message centré quand il n'y a rien à analyser
fn render_no_data(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Statistiques ");

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ESC] Retour au dashboard",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Dessine le footer de l'écran statistiques
fn render_footer(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let shortcuts = Line::from(vec![
        Span::styled(
            "[ESC]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dashboard  "),
        Span::styled(
            "[h l]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Fenêtre  "),
        Span::styled(
            "[q]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Quit"),
    ]);

    let paragraph = Paragraph::new(vec![shortcuts])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_line_proportions() {
        // Moitié du total → moitié de la largeur
        let line = bar_line("Rouge", 10, 20, Color::Red);
        let bar = &line.spans[1].content;
        assert_eq!(bar.chars().count(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_bar_line_zero_count() {
        let line = bar_line("Vert", 0, 20, Color::Green);
        assert!(line.spans[1].content.is_empty());
    }
}
